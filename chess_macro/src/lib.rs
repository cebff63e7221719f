extern crate proc_macro;
use proc_macro::{TokenStream, TokenTree};

#[proc_macro]
pub fn make_ranks_files_squares(_: TokenStream) -> TokenStream {
    let ranks = (
        "Rank",
        vec![
            "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth",
        ]
        .iter()
        .enumerate()
        .map(|(i, v)| (v.to_string(), i as u8))
        .collect::<Vec<(String, u8)>>(),
    );

    let files = (
        "File",
        vec!["A", "B", "C", "D", "E", "F", "G", "H"]
            .iter()
            .enumerate()
            .map(|(i, v)| (v.to_string(), i as u8))
            .collect::<Vec<(String, u8)>>(),
    );

    // 0x88 layout: the rank lives in the high nibble, the file in the low one
    let squares = (
        "Square",
        ranks
            .1
            .iter()
            .flat_map(|(_, r)| {
                files
                    .1
                    .iter()
                    .map(move |(f, fi)| (format!("{f}{}", r + 1), r << 4 | fi))
            })
            .collect::<Vec<(String, u8)>>(),
    );

    let ranks_code = create_enum_and_impl(ranks.0, ranks.1);
    let files_code = create_enum_and_impl(files.0, files.1);
    let squares_code = create_enum_and_impl(squares.0, squares.1);

    let output = format!("{}\n{}\n{}\n", ranks_code, files_code, squares_code);
    output.parse().expect("Output code is valid")
}

fn create_enum_and_impl(name: &str, variants: Vec<(String, u8)>) -> String {
    let mut code =
        format!("#[derive(Debug, Clone, Copy, PartialEq, Eq)]\n#[repr(u8)]\npub enum {name} {{");
    for (v, value) in &variants {
        code += &format!("{v} = {value},")
    }
    code += "}";

    code += &format!(
        "
        impl {name} {{
            pub const ALL: [Self; {}] = [{}];
            pub const fn from_u8_checked(input: u8) -> Option<Self> {{
                match input {{
                    {}
                    _ => None
                }}
            }}
            pub const fn from_u8(input: u8) -> Self {{
                if let Some(v) = Self::from_u8_checked(input) {{
                    v
                }} else {{
                    panic!(\"from_u8 of {name} should be fine\")
                }}
            }}
            pub const fn increment_checked(&self, delta: i16) -> Option<Self> {{
                let value = *self as i16 + delta;
                if value < 0 || value > u8::MAX as i16 {{
                    return None;
                }}
                Self::from_u8_checked(value as u8)
            }}
        }}
    ",
        variants.len(),
        variants.iter().fold(String::new(), |mut acc, (v, _)| {
            acc += &format!("Self::{v},");
            acc
        }),
        variants.iter().fold(String::new(), |mut acc, (v, value)| {
            acc += &format!("{value} => Some(Self::{v}),");
            acc
        })
    );

    code
}

/// Draws a set of relative squares around an origin.
///
/// Takes 15 rows of 15 tokens, rank +7 first and file -7 leftmost, so the
/// centre token is the origin. `X` marks a square, `.` leaves it empty and
/// `o` may be used for the origin to make pictures easier to read.
/// Expands to a `[bool; 256]` indexed by `offset + 0x77`.
#[proc_macro]
pub fn relative_board(tokens: TokenStream) -> TokenStream {
    let mut marked = [false; 256];

    let mut tokens = tokens.into_iter();

    for rank in (-7i32..=7).rev() {
        for file in -7i32..=7 {
            let t = tokens
                .next()
                .expect("Should have a token for each relative square");
            let idx = (rank * 16 + file + 0x77) as usize;
            match t {
                TokenTree::Ident(l) => {
                    let s = l.to_string();
                    match s.as_str() {
                        "X" => marked[idx] = true,
                        "o" if rank == 0 && file == 0 => {}
                        s => panic!("Cannot use Ident '{s}' at ({file}, {rank}) in relative_board!"),
                    }
                }
                TokenTree::Punct(p) => {
                    let s = p.to_string();
                    match s.as_str() {
                        "." => {}
                        s => panic!("Cannot use Punct '{s}' in relative_board!"),
                    }
                }
                s => panic!("Cannot use TokenTree '{:?}' in relative_board!", s),
            }
        }
    }

    if let Some(t) = tokens.next() {
        panic!("Unexpected trailing token '{t}' in relative_board!");
    }

    format!(
        "[{}]",
        marked.iter().fold(String::new(), |mut acc, m| {
            acc += if *m { "true," } else { "false," };
            acc
        })
    )
    .parse()
    .expect("Output of relative_board! should be valid")
}
