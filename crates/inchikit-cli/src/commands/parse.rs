use crate::cli::{OutputFormat, ParseArgs};
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::blocking::run_native;
use inchikit::core::models::atom::AtomRecord;
use inchikit::core::models::stereo::StereoRecord;
use inchikit::workflows::convert::{ParsedStructure, parse_inchi};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::warn;

#[derive(Serialize, Debug)]
#[serde(rename_all = "kebab-case")]
struct BondRow {
    neighbor: i16,
    bond_type: String,
    stereo: i8,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "kebab-case")]
struct AtomRow {
    index: usize,
    element: String,
    position: [f64; 3],
    implicit_hydrogens: [i8; 4],
    isotopic_mass: i16,
    radical: i8,
    charge: i8,
    bonds: Vec<BondRow>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "kebab-case")]
struct StereoRow {
    kind: i8,
    parity: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    central_atom: Option<i16>,
    neighbors: [i16; 4],
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "kebab-case")]
struct ParsedDocument {
    status: String,
    atoms: Vec<AtomRow>,
    stereo: Vec<StereoRow>,
}

fn bond_type_name(raw: i8) -> String {
    inchikit::core::models::topology::BondType::from_raw(raw)
        .map(|kind| kind.to_string())
        .unwrap_or_else(|| format!("Unknown({raw})"))
}

fn atom_row(index: usize, atom: &AtomRecord) -> AtomRow {
    let position = atom.position();
    AtomRow {
        index,
        element: atom.element(),
        position: [position.x, position.y, position.z],
        implicit_hydrogens: *atom.implicit_hydrogens(),
        isotopic_mass: atom.isotopic_mass(),
        radical: atom.radical_raw(),
        charge: atom.charge(),
        bonds: atom
            .bonds()
            .map(|bond| BondRow {
                neighbor: bond.neighbor,
                bond_type: bond_type_name(bond.bond_type),
                stereo: bond.stereo,
            })
            .collect(),
    }
}

fn stereo_row(stereo: &StereoRecord) -> StereoRow {
    StereoRow {
        kind: stereo.kind_raw(),
        parity: stereo.parity_raw(),
        central_atom: stereo.central_atom(),
        neighbors: *stereo.neighbors(),
    }
}

pub fn render_text(parsed: &ParsedStructure) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "status: {}", parsed.status);
    let _ = writeln!(out, "atoms: {}", parsed.atoms.len());
    for (index, atom) in parsed.atoms.iter().enumerate() {
        let row = atom_row(index, atom);
        let bonds: Vec<String> = row
            .bonds
            .iter()
            .map(|b| format!("{}:{}", b.neighbor, b.bond_type))
            .collect();
        let _ = writeln!(
            out,
            "  {:>4} {:<3} H={} charge={} radical={} bonds=[{}]",
            row.index,
            row.element,
            row.implicit_hydrogens[0],
            row.charge,
            row.radical,
            bonds.join(", ")
        );
    }
    let _ = writeln!(out, "stereo: {}", parsed.stereo.len());
    for stereo in &parsed.stereo {
        let row = stereo_row(stereo);
        let _ = writeln!(
            out,
            "  kind={} parity={} central={} neighbors={:?}",
            row.kind,
            row.parity,
            row.central_atom
                .map_or_else(|| "-".to_string(), |c| c.to_string()),
            row.neighbors
        );
    }
    out
}

pub fn render_toml(parsed: &ParsedStructure) -> Result<String> {
    let document = ParsedDocument {
        status: parsed.status.name().to_string(),
        atoms: parsed
            .atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| atom_row(i, atom))
            .collect(),
        stereo: parsed.stereo.iter().map(stereo_row).collect(),
    };
    toml::to_string(&document).map_err(|e| CliError::Other(e.into()))
}

pub async fn run(args: &ParseArgs, config: &AppConfig) -> Result<()> {
    let library = super::load_library(config)?;
    let inchi = args.inchi.clone();
    let options = super::effective_options(args.options.as_deref(), &config.options);

    let parsed = run_native(library, move |lib| parse_inchi(lib, &inchi, &options)).await?;

    if !parsed.status.is_success() {
        return Err(CliError::Conversion(format!(
            "parsing returned {}: {}",
            parsed.status, parsed.message
        )));
    }
    if !parsed.message.is_empty() {
        warn!("Library message: {}", parsed.message);
    }

    let rendered = match args.format {
        OutputFormat::Text => render_text(&parsed),
        OutputFormat::Toml => render_toml(&parsed)?,
    };
    print!("{}", rendered);
    Ok(())
}
