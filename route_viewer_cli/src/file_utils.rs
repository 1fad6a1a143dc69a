use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, anyhow::Error> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Writes `content` to `out`, creating parent folders, or to stdout.
pub fn write_output(out: Option<&PathBuf>, content: &str) -> Result<(), anyhow::Error> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(path, content)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
