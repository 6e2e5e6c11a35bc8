// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
 _ __ _   _ _ __  _ __   __ _  __| |
| '__| | | | '_ \| '_ \ / _` |/ _` |
| |  | |_| | | | | |_) | (_| | (_| |
|_|   \__,_|_| |_| .__/ \__,_|\__,_|
                 |_|

    Online multi-language code runner
"#;
    println!("{}", banner);
}
