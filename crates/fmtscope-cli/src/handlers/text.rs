use anyhow::Result;

/// Print source text verbatim, ensuring a trailing newline.
pub fn handle(text: &str) -> Result<()> {
    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
