use delve_game::Wiki;

pub fn run(query: &[String]) -> Result<(), String> {
    let wiki = Wiki::builtin().map_err(|e| e.to_string())?;
    println!("{}", wiki.search(query));
    Ok(())
}
