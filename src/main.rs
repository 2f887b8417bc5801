use gbasis_shells::{max_shell_type, BasisSet, Molecule, ShellResult};

fn main() {
    env_logger::init();

    println!("=== Gaussian basis shells ===");
    println!("Maximum shell type: {}\n", max_shell_type());

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> ShellResult<()> {
    let molecule = Molecule::h2o();
    let basis = BasisSet::minimal(&molecule)?;
    let offsets = basis.shell_offsets()?;

    println!("Molecule: H2O, minimal basis");
    println!("{:>5} {:>6} {:>14} {:>7} {:>6}", "shell", "center", "type", "offset", "size");
    for (i, (shell, offset)) in basis.shells.iter().zip(&offsets).enumerate() {
        println!(
            "{:>5} {:>6} {:>14} {:>7} {:>6}",
            i,
            shell.center,
            shell.shell_type.to_string(),
            offset,
            shell.nbasis()?
        );
    }
    println!("\nNumber of basis functions: {}", basis.nbasis()?);

    let values = basis.evaluate([0.0, 0.5, 0.5])?;
    println!("Values at (0.0, 0.5, 0.5): {:.6}", values);

    Ok(())
}
