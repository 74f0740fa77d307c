use strmatch::identify::identify_sequence;
use strmatch::io::database::StrDatabase;
use strmatch::io::sequence::load_sequence;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: dna database.csv sequence.txt");
        std::process::exit(1);
    }

    let database = &args[1];
    let sequence_path = &args[2];

    let result = StrDatabase::open(database).and_then(|db| {
        let sequence = load_sequence(sequence_path)?;
        identify_sequence(&db, &sequence)
    });

    match result {
        Ok(identification) => println!("{}", identification),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
