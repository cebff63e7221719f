use clap::{Parser, Subcommand, ValueEnum};
use util::{
    emit::{emit, Dialect},
    error::TableError,
    piece::{AttackPiece, MovePiece},
    table::Tables,
};

/// Prints the 0x88 attack and move tables as source code.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Table to print, both when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short, long, global = true, value_enum, default_value_t = Lang::C)]
    pub lang: Lang,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "snake_case")]
pub enum Command {
    /// Dense attack table with raw direction offsets
    Attacks,
    /// Sparse move table keyed by symbolic offsets
    Moves,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    C,
    Rust,
}

impl From<Lang> for Dialect {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::C => Dialect::C,
            Lang::Rust => Dialect::Rust,
        }
    }
}

pub fn generate(cmd: Option<Command>, dialect: Dialect) -> Result<String, TableError> {
    match cmd {
        Some(Command::Attacks) => emit(dialect, &Tables::<AttackPiece>::build()?),
        Some(Command::Moves) => emit(dialect, &Tables::<MovePiece>::build()?),
        None => Ok(format!(
            "{}{}",
            generate(Some(Command::Attacks), dialect)?,
            generate(Some(Command::Moves), dialect)?
        )),
    }
}
