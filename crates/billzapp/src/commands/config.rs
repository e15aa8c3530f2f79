use crate::commands::{BillzPaths, CmdMessage, CmdResult};
use crate::config::BillzConfig;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &BillzPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = BillzConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!(
                "{} = {}",
                key,
                value.unwrap_or_default()
            )));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.data_dir)?;
            let shown = config.get(&key)?.unwrap_or_default();
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
        }
    }

    result.config = Some(config);
    Ok(result)
}
