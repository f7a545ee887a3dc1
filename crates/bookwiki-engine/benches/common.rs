// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_article_markdown(sections: usize) -> String {
    let base = "## Section\n\nParagraph with some **bold** content.\nSecond line of the paragraph.\n\n```infobox\nName: Ogaro\nStatus: Alive\nBorn: Year 312: winter\n```\n\n> A quote with an infobox\n>\n> ```infobox\n> Key: Value\n> ```\n\n";
    base.repeat(sections)
}
