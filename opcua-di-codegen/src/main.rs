use opcua_di_codegen::{run_codegen, CodeGenConfig, CodeGenError};

fn main() -> Result<(), CodeGenError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run_cli()
}

fn run_cli() -> Result<(), CodeGenError> {
    let args: Vec<String> = std::env::args().collect();

    let [_, config_path] = args.as_slice() else {
        println!(
            r#"Usage:
opcua-di-codegen [config].yml
"#
        );
        return Ok(());
    };

    let root_path = std::path::Path::new(config_path)
        .parent()
        .ok_or_else(|| CodeGenError::other("Invalid config file path"))?;

    let config_text = std::fs::read_to_string(config_path)
        .map_err(|e| CodeGenError::io("Failed to read config from file", e))?;
    let config: CodeGenConfig =
        serde_yaml::from_str(&config_text).map_err(|e| CodeGenError::from(e).in_file(config_path))?;

    let mut path_str = root_path
        .to_str()
        .ok_or_else(|| CodeGenError::other("Config file path must be a valid UTF-8 string"))?;
    if path_str.is_empty() {
        path_str = ".";
    }

    run_codegen(&config, path_str)?;

    Ok(())
}
