use terramena::TerramenaError;

pub fn format_terramena_error(err: &TerramenaError) -> String {
    if let TerramenaError::HostNotFound { .. } = err {
        return format!("{}\n", err);
    }

    let mut out = format!("[ERROR] {}\n", err);

    let hint = match err {
        TerramenaError::StateUnreadable { .. } => {
            Some("Pass the state file with --state or set TERRAMENA_STATE.")
        }
        TerramenaError::TemplateNotFound { .. } => {
            Some("Pass --template or set [deploy].template in terramena.toml.")
        }
        TerramenaError::ChannelFileNotFound { .. } => {
            Some("Pass the channel file with --channel or set TERRAMENA_CHANNEL.")
        }
        TerramenaError::InvalidConfig { .. } => Some("Fix the configuration file and try again."),
        _ => None,
    };
    if let Some(hint) = hint {
        out.push_str(&format!("  hint: {}\n", hint));
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(terramena) = err.downcast_ref::<TerramenaError>() {
        return format_terramena_error(terramena);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(path) = err
            .downcast_ref::<TerramenaError>()
            .and_then(TerramenaError::path)
        {
            output["path"] = serde_json::Value::String(path.display().to_string());
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
