use crate::error::{Error, Result};
use crate::models::CountryData;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Default output file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "countries.json";

/// Serialize countries as an indented JSON array (camelCase keys, emoji kept literal).
pub fn to_json(countries: &[CountryData]) -> Result<String> {
    Ok(serde_json::to_string_pretty(countries)?)
}

/// Temp file in `dir` created with the same mode a plain `File::create`
/// would use (0o666 minus umask) instead of tempfile's private 0o600.
#[cfg_attr(not(unix), allow(unused_mut))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Write through a temp file next to `path`, then rename it into place.
///
/// Either the complete file appears at `path` or nothing changes. An
/// existing file's permissions carry over to the replacement.
fn write_atomic<P, F>(path: P, write: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut NamedTempFile) -> Result<()>,
{
    let path = path.as_ref();
    let io_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = temp_file_in(dir).map_err(io_err)?;
    write(&mut tmp)?;
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(io_err)?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

/// Save countries as pretty JSON, replacing any existing file.
pub fn save_json<P: AsRef<Path>>(countries: &[CountryData], path: P) -> Result<()> {
    let path = path.as_ref();
    let s = to_json(countries)?;
    write_atomic(path, |f| {
        f.write_all(s.as_bytes()).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Neutralize cells a spreadsheet would evaluate as a formula.
///
/// Dialing codes such as `+49` are plain data and left untouched.
fn sanitize_cell(s: &str) -> std::borrow::Cow<'_, str> {
    let is_dialing_code =
        s.len() > 1 && s.starts_with('+') && s[1..].bytes().all(|b| b.is_ascii_digit());
    match s.chars().next() {
        Some('=' | '+' | '-' | '@') if !is_dialing_code => format!("'{s}").into(),
        _ => s.into(),
    }
}

/// Save countries as a flat CSV table with header.
pub fn save_csv<P: AsRef<Path>>(countries: &[CountryData], path: P) -> Result<()> {
    write_atomic(path, |f| {
        let mut wtr = WriterBuilder::new().from_writer(f);
        wtr.write_record([
            "code", "flag", "phone_code", "name_de", "name_en", "name_fr", "name_it", "name_es",
            "continent_en", "region_en", "subregion_en",
        ])?;
        for c in countries {
            let row = [
                &c.code,
                &c.flag,
                &c.phone_code,
                &c.names.german,
                &c.names.english,
                &c.names.french,
                &c.names.italian,
                &c.names.spanish,
                &c.regions.continent.english,
                &c.regions.region.english,
                &c.regions.sub_region.english,
            ];
            wtr.write_record(row.iter().map(|s| sanitize_cell(s).into_owned()))?;
        }
        wtr.flush().map_err(|e| Error::Csv(e.into()))?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let rows = vec![CountryData {
            code: "DE".into(),
            flag: "🇩🇪".into(),
            phone_code: "+49".into(),
            ..Default::default()
        }];
        save_csv(&rows, &csvp).unwrap();
        save_json(&rows, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
        // only the two targets, no leftover temp files
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn sanitize_keeps_dialing_codes() {
        assert_eq!(sanitize_cell("+49"), "+49");
        assert_eq!(sanitize_cell("+1-268"), "'+1-268");
        assert_eq!(sanitize_cell("=SUM(A1)"), "'=SUM(A1)");
        assert_eq!(sanitize_cell("+"), "'+");
        assert_eq!(sanitize_cell("Germany"), "Germany");
        assert_eq!(sanitize_cell(""), "");
    }
}
