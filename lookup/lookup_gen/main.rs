use std::{env, fs, path::Path};
use util::{
    emit::{emit, Dialect},
    piece::{AttackPiece, MovePiece},
    table::Tables,
};

fn main() {
    println!("cargo:rerun-if-changed=lookup_gen/main.rs");

    let out_dir = env::var_os("OUT_DIR").expect("reading env succeeds");
    let dest_path = Path::new(&out_dir).join("lookup.rs");

    let attacks = Tables::<AttackPiece>::build().expect("attack offsets fit the window");
    let moves = Tables::<MovePiece>::build().expect("move offsets fit the window");

    let attack_code = emit(Dialect::Rust, &attacks).expect("attack table emits");
    let move_code = emit(Dialect::Rust, &moves).expect("move table emits");

    fs::write(dest_path, format!("{}{}", attack_code, move_code))
        .expect("writing lookups succeeds");
}
