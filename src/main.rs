use cidr_first_host::get_first_ip_address;
use cidr_first_host::output::{print_first_host, render_json};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let mut json = false;
    let mut cidr: Option<String> = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            cidr = Some(arg);
        }
    }
    let cidr = cidr.ok_or("Usage: cidr-first-host <a.b.c.d/n> [--json]")?;

    let addresses = get_first_ip_address(&cidr)?;
    if json {
        println!("{}", render_json(&addresses)?);
    } else {
        print_first_host(&cidr, &addresses);
    }

    Ok(())
}
