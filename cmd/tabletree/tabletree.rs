use clap::Parser;
use tabletree::{cli::CLI, initializers::init_tracing, table::TableFile};

fn main() -> eyre::Result<()> {
    let CLI { opts, command } = CLI::parse();
    init_tracing(&opts);

    let tree = TableFile::read(&opts.table)?.build_tree()?;
    let output = command.run(&tree, opts.json)?;
    println!("{output}");
    Ok(())
}
