use crate::config::{self, SOURCE_ENV};

pub fn handle_config(source: Option<String>) {
    let mut user_config = config::load_config();

    match source {
        None => {
            match user_config.source {
                Some(ref source) => println!("Source: {}", source),
                None => println!("Source: (not set)"),
            }
            if let Ok(path) = config::get_config_path() {
                println!("Config file: {}", path.display());
            }
            println!();
            println!("The --source flag and the {} variable override this setting.", SOURCE_ENV);
            println!("To change: challs config --set-source <file-or-url>");
        }
        Some(new_source) => {
            if user_config.source.as_deref() == Some(new_source.as_str()) {
                println!("Source is already set to {}", new_source);
                return;
            }

            user_config.source = Some(new_source.clone());
            if let Err(e) = config::save_config(&user_config) {
                eprintln!("Failed to save config: {}", e);
                std::process::exit(1);
            }

            println!("Source set to {}", new_source);
        }
    }
}
