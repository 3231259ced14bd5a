pub mod config;

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pbmap::{
    dump_map_file, load_map_file, qpack, read_map_text, Kind, MapDocument, MapEntity, MapError,
    MapIoError, Opcode, Trigger,
};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

pub use config::{load_config, CliConfig};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Io(#[from] MapIoError),
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path} at '{field}': {message}")]
    ConfigParse {
        path: PathBuf,
        field: String,
        message: String,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fetch is unavailable: rebuild pbmap_cli with `--features online`")]
    OnlineDisabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Convert {
        input: PathBuf,
        output: PathBuf,
    },
    Inspect {
        input: PathBuf,
        json: bool,
    },
    Unpack {
        input: PathBuf,
        records: bool,
    },
    Fetch {
        map_id: String,
        out: Option<PathBuf>,
        records: bool,
    },
}

pub fn run(kind: CommandKind, config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    match kind {
        CommandKind::Convert { input, output } => convert(&input, &output, out),
        CommandKind::Inspect { input, json } => {
            let document = load_map_file(&input)?;
            if json {
                write_json(out, &inspect_entries(&document), config.pretty_json)
            } else {
                write_summary(out, &document)
            }
        }
        CommandKind::Unpack { input, records } => {
            let encoded = read_map_text(&input)?;
            let decoded = qpack::decode(&encoded);
            write_decoded(out, &decoded, records, config.pretty_json)
        }
        CommandKind::Fetch {
            map_id,
            out: target,
            records,
        } => fetch(&map_id, target.as_deref(), records, config, out),
    }
}

fn convert(input: &Path, output: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let document = load_map_file(input)?;
    dump_map_file(&document, output)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        entities = document.len(),
        "map_converted"
    );
    writeln!(
        out,
        "converted {} entities: {} -> {}",
        document.len(),
        input.display(),
        output.display()
    )?;
    Ok(())
}

#[derive(Serialize)]
struct InspectEntry<'a> {
    kind: &'static str,
    #[serde(flatten)]
    entity: &'a MapEntity,
}

fn inspect_entries(document: &MapDocument) -> Vec<InspectEntry<'_>> {
    document
        .iter()
        .map(|entity| InspectEntry {
            kind: entity.kind().tag(),
            entity,
        })
        .collect()
}

fn write_summary(out: &mut impl Write, document: &MapDocument) -> Result<(), CliError> {
    writeln!(out, "{} entities", document.len())?;
    for (kind, count) in kind_counts(document) {
        writeln!(out, "  {:<8} {count}", kind.tag())?;
    }
    for entity in document.entities(Kind::Trigger) {
        if let MapEntity::Trigger(trigger) = entity {
            write_trigger(out, trigger)?;
        }
    }
    Ok(())
}

fn write_trigger(out: &mut impl Write, trigger: &Trigger) -> Result<(), CliError> {
    writeln!(
        out,
        "trigger {} ({} actions, enabled={}, maxcalls={})",
        trigger.uid,
        trigger.actions.len(),
        trigger.enabled,
        trigger.maxcalls
    )?;
    for (index, action) in trigger.actions.iter().enumerate() {
        let description = action
            .known_opcode()
            .map(Opcode::describe)
            .unwrap_or("unknown action");
        writeln!(
            out,
            "  {:>2}. [{}] {description} {:?}",
            index + 1,
            action.opcode,
            action.args
        )?;
    }
    Ok(())
}

fn write_decoded(
    out: &mut impl Write,
    decoded: &str,
    records: bool,
    pretty: bool,
) -> Result<(), CliError> {
    if records {
        write_json(out, &qpack::parse_records(decoded), pretty)
    } else {
        writeln!(out, "{decoded}")?;
        Ok(())
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Per-kind entity counts, in catalog order.
pub fn kind_counts(document: &MapDocument) -> BTreeMap<Kind, usize> {
    Kind::ALL
        .into_iter()
        .map(|kind| (kind, document.count(kind)))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[cfg(feature = "online")]
fn fetch(
    map_id: &str,
    target: Option<&Path>,
    records: bool,
    config: &CliConfig,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let fetcher = pbmap::HttpMapFetcher::with_endpoint(config.endpoint.clone())?;
    let decoded = pbmap::fetch_map_markup(&fetcher, map_id)?;
    match target {
        Some(path) => {
            let document = MapDocument::import(&decoded)?;
            dump_map_file(&document, path)?;
            writeln!(
                out,
                "saved {} entities of map '{map_id}' to {}",
                document.len(),
                path.display()
            )?;
            Ok(())
        }
        None => write_decoded(out, &decoded, records, config.pretty_json),
    }
}

#[cfg(not(feature = "online"))]
fn fetch(
    _map_id: &str,
    _target: Option<&Path>,
    _records: bool,
    _config: &CliConfig,
    _out: &mut impl Write,
) -> Result<(), CliError> {
    Err(CliError::OnlineDisabled)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const LEVEL: &str = r#"<door uid="lift" x="0" y="0" w="10" h="100" />
<box x="0" y="100" w="300" h="20" m="0" />
<trigger uid="start" enabled="true" actions_1_type="0" actions_1_targetA="lift" actions_1_targetB="top" actions_2_type="777" />
"#;

    fn level_file(dir: &Path) -> PathBuf {
        let path = dir.join("level.xml");
        fs::write(&path, LEVEL).expect("write level");
        path
    }

    fn run_to_string(kind: CommandKind, config: &CliConfig) -> String {
        let mut out = Vec::new();
        run(kind, config, &mut out).expect("run");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn convert_writes_canonical_markup() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = level_file(dir.path());
        let output = dir.path().join("out").join("level.xml");
        let printed = run_to_string(
            CommandKind::Convert {
                input,
                output: output.clone(),
            },
            &CliConfig::default(),
        );
        assert!(printed.starts_with("converted 3 entities"), "{printed}");

        let written = fs::read_to_string(&output).expect("read output");
        assert!(written.starts_with(r#"<door uid="lift" vis="false""#), "{written}");
        assert_eq!(written.lines().count(), 3);
    }

    #[test]
    fn inspect_lists_counts_and_trigger_actions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let printed = run_to_string(
            CommandKind::Inspect {
                input: level_file(dir.path()),
                json: false,
            },
            &CliConfig::default(),
        );
        assert!(printed.contains("3 entities"), "{printed}");
        assert!(printed.contains("trigger start (2 actions"), "{printed}");
        assert!(printed.contains("move movable A to region B"), "{printed}");
        assert!(printed.contains("[777] unknown action"), "{printed}");
    }

    #[test]
    fn inspect_json_tags_each_entity_with_its_kind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = CliConfig {
            pretty_json: false,
            ..CliConfig::default()
        };
        let printed = run_to_string(
            CommandKind::Inspect {
                input: level_file(dir.path()),
                json: true,
            },
            &config,
        );
        let value: serde_json::Value = serde_json::from_str(&printed).expect("json");
        let entries = value.as_array().expect("array");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["kind"], "door");
        assert_eq!(entries[0]["uid"], "lift");
        assert_eq!(entries[1]["kind"], "box");
        assert_eq!(entries[2]["actions"][0]["opcode"], 0);
    }

    #[test]
    fn unpack_decodes_qpack_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let packed = dir.path().join("map.qpack");
        fs::write(&packed, "<box x=\"5^Q6^R7^S8^T0\" />").expect("write");

        let printed = run_to_string(
            CommandKind::Unpack {
                input: packed.clone(),
                records: false,
            },
            &CliConfig::default(),
        );
        assert_eq!(printed, "<box x=\"5\" y=\"6\" w=\"7\" h=\"8\" m=\"0\" />\n");

        let printed = run_to_string(
            CommandKind::Unpack {
                input: packed,
                records: true,
            },
            &CliConfig::default(),
        );
        let value: serde_json::Value = serde_json::from_str(&printed).expect("json");
        assert_eq!(value[0]["type"], "box");
        assert_eq!(value[0]["w"], 7);
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut out = Vec::new();
        let err = run(
            CommandKind::Inspect {
                input: dir.path().join("absent.xml"),
                json: false,
            },
            &CliConfig::default(),
            &mut out,
        )
        .expect_err("missing file");
        assert!(err.to_string().contains("not found"), "{err}");
    }

    #[test]
    fn kind_counts_skip_empty_kinds() {
        let document = MapDocument::import(LEVEL).expect("import");
        let counts = kind_counts(&document);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get(&Kind::Box), Some(&1));
    }
}
