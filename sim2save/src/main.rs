use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use sim2save_core::{open, SavFile};
use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

#[derive(Parser)]
#[command(about = "Inspect and edit The Sims 2 GBA/NDS cartridge saves.")]
struct Args {
    #[arg(help = "Path to the .sav file")]
    path: PathBuf,

    #[arg(short, long, help = "Slot to edit (1-4 on GBA, 0-2 on NDS)")]
    slot: Option<u8>,

    #[arg(short, long, help = "Rename the Sim in the selected slot")]
    name: Option<String>,

    #[arg(short = 'm', long, help = "Set the Simoleon count in the selected slot")]
    simoleons: Option<u32>,

    #[arg(long, help = "Skip the timestamped backup before writing")]
    #[arg(default_value = "false")]
    no_backup: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    ensure!(args.path.exists(), "file path provided does not exist");
    let mut sav = open(&args.path).context("failed loading save")?;

    if args.name.is_none() && args.simoleons.is_none() {
        print_summary(&mut sav);
        return Ok(());
    }

    let slot = args
        .slot
        .context("--slot is required when editing a save")?;
    apply_edits(&mut sav, slot, args.name.as_deref(), args.simoleons)?;

    if !args.no_backup {
        backup(&args.path).context("failed writing backup")?;
    }
    if sav.write_back(&args.path).context("failed writing save")? {
        println!("Save updated.");
    } else {
        println!("Nothing changed.");
    }
    Ok(())
}

fn apply_edits(sav: &mut SavFile, slot: u8, name: Option<&str>, simoleons: Option<u32>) -> Result<()> {
    match sav {
        SavFile::Gba(sav) => {
            let Some(mut view) = sav.slot(slot) else {
                bail!("GBA slot {slot} is empty or out of range (1-4)");
            };
            if let Some(name) = name {
                view.set_name(name);
            }
            if let Some(simoleons) = simoleons {
                view.set_simoleons(simoleons);
            }
        }
        SavFile::Nds(sav) => {
            let Some(mut view) = sav.slot(slot) else {
                bail!("NDS slot {slot} is empty or out of range (0-2)");
            };
            if let Some(name) = name {
                view.set_name(name);
            }
            if let Some(simoleons) = simoleons {
                view.set_simoleons(simoleons);
            }
        }
    }
    Ok(())
}

fn print_summary(sav: &mut SavFile) {
    match sav {
        SavFile::Gba(sav) => {
            println!("Format: GBA");
            println!("Language: {:?}", sav.settings().language());
            for slot in 1..=4 {
                match sav.slot(slot) {
                    Some(view) => println!(
                        "Slot {slot}: {} ({})",
                        view.name(),
                        simoleons_string(view.simoleons())
                    ),
                    None => println!("Slot {slot}: empty"),
                }
            }
        }
        SavFile::Nds(sav) => {
            println!("Format: NDS ({:?})", sav.region());
            for slot in 0..3 {
                match sav.slot(slot) {
                    Some(view) => println!(
                        "Slot {slot}: {} ({})",
                        view.name(),
                        simoleons_string(view.simoleons())
                    ),
                    None => println!("Slot {slot}: empty"),
                }
            }
        }
    }
}

// Copies the save next to itself before the first write, stamped with the
// current Unix time.
fn backup(path: &Path) -> Result<PathBuf> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before Unix epoch")?
        .as_secs();
    let target = path.with_extension(format!("{secs}.bak"));
    fs::copy(path, &target)?;
    println!("Backup written to {}", target.display());
    Ok(target)
}

fn simoleons_string(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.push('§');
    out
}

#[cfg(test)]
mod test {
    use super::simoleons_string;

    #[test]
    fn simoleons_grouped_by_thousands() {
        assert_eq!(simoleons_string(0), "0§");
        assert_eq!(simoleons_string(999), "999§");
        assert_eq!(simoleons_string(1000), "1.000§");
        assert_eq!(simoleons_string(999_999), "999.999§");
    }
}
