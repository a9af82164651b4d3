// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_question_file(categories: usize, questions_per_category: usize) -> String {
    let mut content = String::from("// generated benchmark input\n");

    for category in 0..categories {
        content.push_str(&format!("$CATEGORY: $course$/top/Unit{category} [U{category}]\n"));
        for question in 0..questions_per_category {
            let line = match question % 4 {
                0 => format!("::Word {question}::Find the word {{BANJO}}\n"),
                1 => format!("Fill the gaps {{the quick brown fox [8] ####Well done {question}}}\n"),
                2 => "{no description at all}\n".to_string(),
                _ => "Broken {lower}\n".to_string(),
            };
            content.push_str(&line);
        }
    }

    content
}
