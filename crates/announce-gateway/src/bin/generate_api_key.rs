use rand::Rng;

/// Key length in random bytes before hex encoding.
const DEFAULT_KEY_BYTES: usize = 32;

/// The managed gateway refuses keys shorter than 20 characters.
const MIN_KEY_BYTES: usize = 10;

fn main() {
    let bytes = match parse_bytes() {
        Ok(bytes) => bytes,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    let mut rng = rand::rng();
    let api_key: String = (0..bytes)
        .map(|_| format!("{:02x}", rng.random::<u8>()))
        .collect();

    println!("GATEWAY_API_KEY={api_key}");
}

/// Parse `--bytes <n>` from CLI arguments.
fn parse_bytes() -> Result<usize, String> {
    let args: Vec<String> = std::env::args().collect();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--bytes" {
            let value = iter.next().ok_or("--bytes needs a value")?;
            let bytes: usize = value
                .parse()
                .map_err(|_| format!("--bytes expects a number, got {value:?}"))?;
            if bytes < MIN_KEY_BYTES {
                return Err(format!("--bytes must be at least {MIN_KEY_BYTES}"));
            }
            return Ok(bytes);
        }
    }
    Ok(DEFAULT_KEY_BYTES)
}
