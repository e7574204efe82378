//! Loading configuration from a `.env` file.

use cmtt::{Cmtt, Platform};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_from_env_reads_dotenv_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(".env");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "CMTT_PLATFORM=vc")?;
    writeln!(file, "CMTT_TOKEN=from-dotenv")?;
    writeln!(file, "CMTT_CALLS_PER_WINDOW=2")?;
    writeln!(file, "CMTT_TIMEOUT_MS=1500")?;
    drop(file);

    dotenvy::from_path(&path)?;
    let client = Cmtt::from_env()?;
    let config = client.dispatcher().config();

    assert_eq!(config.platform(), &Platform::Vc);
    assert_eq!(config.token().as_deref(), Some("from-dotenv"));
    assert_eq!(config.calls_per_window(), &2);
    assert_eq!(config.timeout(), &Some(Duration::from_millis(1500)));
    assert_eq!(client.dispatcher().limiter().quota().capacity(), 2);
    Ok(())
}
