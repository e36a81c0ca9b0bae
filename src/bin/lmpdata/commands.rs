use anyhow::{Context, Result, bail};

use lmpdata::read;

use crate::cli::Cli;
use crate::config::build_parse_options;
use crate::display::{
    Context as DisplayContext, Progress, print_structure_info, print_type_distribution,
};
use crate::io::{CountingReader, open_input, stdin_is_tty};
use crate::util::text::format_bytes;

const TOTAL_STEPS: u8 = 2;

pub fn run(cli: Cli, ctx: DisplayContext) -> Result<()> {
    if cli.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: lmpdata <FILE> or pipe data via stdin."
        );
    }

    let options = build_parse_options(&cli);
    let source_name = cli
        .input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Opening input");
    let mut source = CountingReader::new(open_input(cli.input.as_deref())?);
    progress.complete_step("Opening input", &[source_name.as_str()]);

    progress.step("Parsing LAMMPS data");
    let sim = read(&mut source, &options)
        .with_context(|| format!("Failed to read LAMMPS data from {source_name}"))?;

    let substeps = [
        format!("Read {}", format_bytes(source.bytes())),
        format!("Header: {} atoms, {} atom types", sim.num_atoms(), sim.num_atom_types()),
        format!("Atom style: {}", sim.style_declaration()),
        format!("Box: {}", if sim.cell().is_orthogonal() { "orthogonal" } else { "triclinic" }),
    ];
    let substeps_ref: Vec<&str> = substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Parsing LAMMPS data", &substeps_ref);

    progress.finish(&format!("Parsed {} atoms", sim.num_atoms()));

    if ctx.interactive {
        print_structure_info(&sim);
        print_type_distribution(&sim);
    }

    println!("Got box with {} atoms", sim.num_atoms());

    Ok(())
}
