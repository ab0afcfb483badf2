use clap::Parser;

use invoicekit_cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.log_json {
        invoicekit_observability::init_json();
    } else {
        invoicekit_observability::init();
    }

    let output = invoicekit_cli::run(&args)?;
    println!("{output}");
    Ok(())
}
