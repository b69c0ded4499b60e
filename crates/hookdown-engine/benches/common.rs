// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_message(lines: usize) -> String {
    let base = [
        "Hey <@123>, the **release** is out! Check [notes](https://example.com/notes)",
        "- fixed ~~old~~ *flaky* tests in `runner`",
        "  * spoiler: ||it was DNS|| @here",
        "plain text line with no formatting at all",
    ];
    base.iter()
        .cycle()
        .take(lines)
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

#[allow(dead_code)]
pub fn generate_discord_limit_message() -> String {
    let mut msg = generate_message(40);
    msg.truncate(2000);
    msg
}
