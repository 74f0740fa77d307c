use crate::error::Result;
use crate::repeat::StrProfile;
use serde::Serialize;
use std::io::Write;

/// Output layout for profile reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Tsv,
    Json,
}

/// Write one `STR<TAB>count` line per profiled pattern
pub fn write_profile_tsv<W: Write>(profile: &StrProfile, mut writer: W) -> std::io::Result<()> {
    for (pattern, count) in profile.iter() {
        writeln!(writer, "{}\t{}", pattern, count)?;
    }
    Ok(())
}

/// Serialize any report as pretty JSON followed by a newline
pub fn write_json<T: Serialize, W: Write>(value: &T, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_profile<W: Write>(profile: &StrProfile, format: ReportFormat, writer: W) -> Result<()> {
    match format {
        ReportFormat::Tsv => write_profile_tsv(profile, writer)?,
        ReportFormat::Json => write_json(profile, writer)?,
    }
    Ok(())
}
