use billscan_core::error::BillscanError;
use billscan_core::vocab::Vocabulary;

pub fn list() -> Result<(), BillscanError> {
    let vocab = Vocabulary::builtin();

    println!("Services ({}):", vocab.services.len());
    for name in &vocab.services {
        println!("  {name}");
    }
    println!();
    println!("Regions ({}):", vocab.regions.len());
    for name in &vocab.regions {
        println!("  {name}");
    }

    Ok(())
}
