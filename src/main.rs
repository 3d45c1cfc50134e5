use envprobe::probe::Fingerprinter;
use tracing_subscriber::EnvFilter;

/// Entry point - runs every probe once against the current machine
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let fingerprinter = Fingerprinter::new();

    println!("[*] Probing environment (window and cursor probes take ~20s)...");
    let details = fingerprinter.details();

    for (name, verdict) in details.entries() {
        println!("    {:<28} {:>2}  {}", name, i32::from(verdict), verdict);
    }

    let failed = details.failed_count();
    if failed > 0 {
        println!("\n[!] {} probe(s) found sandbox, VM or debugger indicators", failed);
    } else {
        println!("\n[+] No sandbox indicators found.");
    }
}
