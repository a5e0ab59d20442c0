use crate::error::Result;
use crate::log_info;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub fn ensure_parent_directory(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn save_json(data: &impl serde::Serialize, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_directory(path)?;

    let json_string = serde_json::to_string_pretty(data)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;

    log_info!("[utils] Saved result to {}", path.display());
    Ok(())
}

/// Pretty JSON to `out`, followed by a newline.
pub fn write_json(data: &impl serde::Serialize, mut out: impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, data)?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Outcome, StudentIdentity};

    #[test]
    fn writes_outcome_as_pretty_json() {
        let mut buffer = Vec::new();
        let outcome = Outcome::ok(StudentIdentity {
            name: "Jane".to_string(),
        });
        write_json(&outcome, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["data"]["name"], "Jane");
    }

    #[test]
    fn save_json_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("hac-scraper-test-{}", std::process::id()));
        let path = dir.join("nested").join("out.json");

        save_json(&vec![1, 2, 3], &path).unwrap();

        let saved: Vec<u32> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, vec![1, 2, 3]);
        fs::remove_dir_all(dir).unwrap();
    }
}
