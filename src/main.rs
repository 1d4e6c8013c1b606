use std::error::Error;
use std::io::Write;

use log::LevelFilter;

use qrstream::{ECLevel, QRBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let mut args = std::env::args().skip(1);
    let data = args.next().unwrap_or_else(|| "Hello, world! 🌏".to_string());
    let ec_level = match args.next() {
        Some(s) => s.parse::<ECLevel>()?,
        None => ECLevel::M,
    };

    let plan = QRBuilder::new(&data).ec_level(ec_level).build()?;

    println!("Mode: {:?}", plan.mode());
    let width = plan.version().width();
    println!("Version: {} ({width}x{width} modules)", plan.version().number());
    println!("Ec level: {:?}", plan.ec_level());
    println!("Mode indicator: {}", plan.mode_indicator());
    println!("Char count indicator: {}", plan.char_count_indicator());
    for seg in plan.segments() {
        println!("  {seg}");
    }
    println!("Data ({} bits): {}", plan.data().len(), plan.data());

    Ok(())
}
