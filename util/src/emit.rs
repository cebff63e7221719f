use crate::{
    direction::Direction,
    error::TableError,
    piece::{Layout, PieceKind},
    symbolic::encode,
    table::{relative_index, Tables, LEN, ORIGIN},
};

/// Target language of the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Constant arrays for the C engine, `CHESS_*` names.
    C,
    /// `pub const` items for `include!`, expecting the direction constants
    /// and piece enums of this crate in scope.
    Rust,
}

impl Dialect {
    fn offset_prefix(&self) -> &'static str {
        match self {
            Self::C => "CHESS_OFFSET_",
            Self::Rust => "",
        }
    }

    fn reach_decl(&self, table: &str) -> String {
        match self {
            Self::C => format!("static CHESS_CONSTEXPR uint8_t {table}[256]"),
            Self::Rust => format!("pub const {}: [u8; 256]", table.to_uppercase()),
        }
    }

    fn direction_decl(&self, table: &str) -> String {
        match self {
            Self::C => "static CHESS_CONSTEXPR ChessOffset directions[256]".to_owned(),
            Self::Rust => format!(
                "pub const {}_DIRECTIONS: [i16; 256]",
                table.trim_end_matches('s').to_uppercase()
            ),
        }
    }

    fn piece_bits<P: PieceKind>(&self, mask: u8) -> String {
        P::ALL
            .iter()
            .filter(|p| mask & p.bit() != 0)
            .map(|p| match self {
                Self::C => format!("1U << CHESS_PIECE_TYPE_{}", p.name()),
                Self::Rust => format!("{}::{:?}.bit()", P::TYPE_NAME, p),
            })
            .collect::<Vec<String>>()
            .join(" | ")
    }

    fn dense<T: std::fmt::Display>(&self, decl: &str, values: &[T; LEN]) -> String {
        let (open, close, indent) = match self {
            Self::C => ("{", "};", "\t"),
            Self::Rust => ("[", "];", "    "),
        };
        let mut code = format!("{decl} = {open}\n");
        for row in values.chunks(16) {
            code += indent;
            for value in row {
                code += &format!("{value:3},");
            }
            code += "\n";
        }
        code += close;
        code += "\n";
        code
    }

    fn sparse(&self, decl: &str, entries: &[(String, String)]) -> String {
        let mut code = String::new();
        match self {
            Self::C => {
                code += &format!("{decl} = {{\n");
                for (key, value) in entries {
                    code += &format!("\t[{key} + 0x77] = {value},\n");
                }
                code += "};\n";
            }
            Self::Rust => {
                code += &format!("{decl} = {{\n    let mut table = [0; 256];\n");
                for (key, value) in entries {
                    code += &format!("    table[({key} + 0x77) as usize] = {value};\n");
                }
                code += "    table\n};\n";
            }
        }
        code
    }
}

/// Order in which sparse entries are written: the straight lines from the
/// origin first, grouped by direction and distance, then everything else row
/// by row.
pub fn emission_order() -> Vec<usize> {
    let mut order = Vec::with_capacity(LEN);
    let mut seen = [false; LEN];
    let rays = Direction::ALL
        .iter()
        .flat_map(|d| (0..8).map(move |k| d.times(k)))
        .filter_map(relative_index);
    for idx in rays.chain(0..LEN) {
        if !seen[idx] {
            seen[idx] = true;
            order.push(idx);
        }
    }
    order
}

/// Writes both tables of `tables` in the layout of its piece numbering.
pub fn emit<P: PieceKind>(dialect: Dialect, tables: &Tables<P>) -> Result<String, TableError> {
    let reach_decl = dialect.reach_decl(P::TABLE);
    let direction_decl = dialect.direction_decl(P::TABLE);

    match P::LAYOUT {
        Layout::Dense => Ok(format!(
            "{}{}",
            dialect.dense(&reach_decl, tables.reach()),
            dialect.dense(&direction_decl, tables.directions())
        )),
        Layout::Sparse => {
            let prefix = dialect.offset_prefix();
            let mut reach = Vec::new();
            let mut directions = Vec::new();
            for idx in emission_order() {
                let key = || encode(idx as i16 - ORIGIN as i16).map(|e| e.render(prefix));
                let mask = tables.reach()[idx];
                if mask != 0 {
                    reach.push((key()?, dialect.piece_bits::<P>(mask)));
                }
                let dir = tables.directions()[idx];
                if dir != 0 {
                    directions.push((key()?, encode(dir)?.render(prefix)));
                }
            }
            Ok(format!(
                "{}{}",
                dialect.sparse(&reach_decl, &reach),
                dialect.sparse(&direction_decl, &directions)
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{AttackPiece, MovePiece};

    fn attack_c() -> String {
        let tables = Tables::<AttackPiece>::build().expect("attack tables build");
        emit(Dialect::C, &tables).expect("attack tables emit")
    }

    fn move_c() -> String {
        let tables = Tables::<MovePiece>::build().expect("move tables build");
        emit(Dialect::C, &tables).expect("move tables emit")
    }

    #[test]
    fn order_covers_every_index_once() {
        let order = emission_order();
        assert_eq!(order.len(), LEN);
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, (0..LEN).collect::<Vec<usize>>());
        assert_eq!(order[0], ORIGIN);
        assert_eq!(order[1], ORIGIN + 16);
    }

    #[test]
    fn dense_attack_table() {
        let code = attack_c();
        let lines = code.lines().collect::<Vec<&str>>();
        assert_eq!(lines.len(), 2 * 18);
        assert_eq!(lines[0], "static CHESS_CONSTEXPR uint8_t attacks[256] = {");
        assert_eq!(lines[17], "};");
        assert_eq!(lines[18], "static CHESS_CONSTEXPR ChessOffset directions[256] = {");
        for row in lines[1..17].iter().chain(&lines[19..35]) {
            assert!(row.starts_with('\t'));
            assert_eq!(row.matches(',').count(), 16);
        }
        // origin row: rook/queen along the rank, king next to the origin
        let origin_row = lines[1 + ORIGIN / 16]
            .split(',')
            .filter_map(|v| v.trim().parse::<u8>().ok())
            .collect::<Vec<u8>>();
        let line = AttackPiece::Rook.bit() | AttackPiece::Queen.bit();
        assert_eq!(origin_row[7], 0);
        assert_eq!(origin_row[6], line | AttackPiece::King.bit());
        assert_eq!(origin_row[0], line);
        assert_eq!(origin_row[15], 0);
    }

    #[test]
    fn dense_direction_values() {
        let code = attack_c();
        let row = code
            .lines()
            .nth(19 + ORIGIN / 16)
            .expect("direction origin row exists");
        let values = row
            .split(',')
            .filter_map(|v| v.trim().parse::<i16>().ok())
            .collect::<Vec<i16>>();
        assert_eq!(values[..7], [-1; 7]);
        assert_eq!(values[7], 0);
        assert_eq!(values[8..15], [1; 7]);
        assert_eq!(values[15], 0);
    }

    #[test]
    fn sparse_move_table() {
        let code = move_c();
        assert!(code.starts_with("static CHESS_CONSTEXPR uint8_t moves[256] = {\n"));
        assert!(code.contains(
            "\t[CHESS_OFFSET_NORTH + 0x77] = 1U << CHESS_PIECE_TYPE_PAWN | 1U << CHESS_PIECE_TYPE_ROOK | 1U << CHESS_PIECE_TYPE_QUEEN | 1U << CHESS_PIECE_TYPE_KING,\n"
        ));
        assert!(code.contains(
            "\t[2 * CHESS_OFFSET_EAST + 0x77] = 1U << CHESS_PIECE_TYPE_ROOK | 1U << CHESS_PIECE_TYPE_QUEEN | 1U << CHESS_PIECE_TYPE_KING,\n"
        ));
        assert!(code.contains(
            "\t[CHESS_OFFSET_EAST + 2 * CHESS_OFFSET_NORTH + 0x77] = 1U << CHESS_PIECE_TYPE_KNIGHT,\n"
        ));
        assert!(code.contains(
            "\t[3 * CHESS_OFFSET_NORTH_EAST + 0x77] = CHESS_OFFSET_NORTH_EAST,\n"
        ));
        assert!(!code.contains("[0 + 0x77]"));
        assert!(code.contains("static CHESS_CONSTEXPR ChessOffset directions[256] = {\n"));
    }

    #[test]
    fn sparse_entry_counts() {
        let tables = Tables::<MovePiece>::build().expect("move tables build");
        let code = emit(Dialect::C, &tables).expect("move tables emit");
        let entries = code.lines().filter(|l| l.starts_with("\t[")).count();
        let reach = tables.reach().iter().filter(|m| **m != 0).count();
        let dirs = tables.directions().iter().filter(|d| **d != 0).count();
        assert_eq!(entries, reach + dirs);
        // pushes and castling hops already lie on the queen lines
        assert_eq!(reach, 56 + 8);
        assert_eq!(dirs, 56);
    }

    #[test]
    fn rust_dialect() {
        let attacks = Tables::<AttackPiece>::build().expect("attack tables build");
        let code = emit(Dialect::Rust, &attacks).expect("attack tables emit");
        assert!(code.starts_with("pub const ATTACKS: [u8; 256] = [\n    "));
        assert!(code.contains("pub const ATTACK_DIRECTIONS: [i16; 256] = [\n"));
        let mask = AttackPiece::Rook.bit() | AttackPiece::King.bit();
        assert_eq!(
            Dialect::Rust.piece_bits::<AttackPiece>(mask),
            "AttackPiece::Rook.bit() | AttackPiece::King.bit()"
        );

        let moves = Tables::<MovePiece>::build().expect("move tables build");
        let code = emit(Dialect::Rust, &moves).expect("move tables emit");
        assert!(code.starts_with("pub const MOVES: [u8; 256] = {\n    let mut table = [0; 256];\n"));
        assert!(code.contains(
            "    table[(EAST + 2 * NORTH + 0x77) as usize] = MovePiece::Knight.bit();\n"
        ));
        assert!(code.contains("pub const MOVE_DIRECTIONS: [i16; 256] = {\n"));
        assert!(code.contains("    table[(7 * SOUTH_WEST + 0x77) as usize] = SOUTH_WEST;\n"));
        assert!(code.ends_with("    table\n};\n"));
    }
}
