use color_print::cformat;

use crate::program::Program;

pub fn print_dump(path: &str, program: &Program) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(19),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );
    let mut words = program.words.iter();
    for listed in &program.listing {
        let comment = listed
            .comment
            .as_ref()
            .map(|s| cformat!("<dim>//{}</>", s))
            .unwrap_or_default();
        let line_num = listed.line + 1;
        let body = match (&listed.stmt, listed.pc) {
            (Some(stmt), Some(pc)) => {
                let bin = match words.next() {
                    Some(word) => format!("{:04X}", word),
                    None => cformat!("<r,s>!!!!</>"),
                };
                format!(
                    "[{:04X}] {}        | {:>4}:   {} {}",
                    pc,
                    bin,
                    line_num,
                    stmt.cformat(),
                    comment
                )
            }
            (Some(stmt), None) => {
                format!("{:19}| {:>4}: {} {}", "", line_num, stmt.cformat(), comment)
            }
            (None, _) => format!("{:19}| {:>4}: {}", "", line_num, comment),
        };
        println!("{}", body);
    }
    println!("-------------------+-----------------------------------------------------");
}
