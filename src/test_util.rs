//! Shared helpers for unit tests. The env guard serializes tests that touch
//! `HOME`, since the process environment is global.

pub(crate) fn with_temp_home<F, R>(func: F) -> R
where
    F: FnOnce(&std::path::Path) -> R,
{
    static HOME_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    let _guard = HOME_LOCK.lock().expect("home lock");
    let dir = tempfile::tempdir().expect("tempdir");
    let old_home = std::env::var("HOME").ok();
    let old_base = std::env::var("DICT_CC_DIR").ok();
    std::env::set_var("HOME", dir.path());
    std::env::remove_var("DICT_CC_DIR");

    let result = func(dir.path());

    match old_home {
        Some(old) => std::env::set_var("HOME", old),
        None => std::env::remove_var("HOME"),
    }
    if let Some(old) = old_base {
        std::env::set_var("DICT_CC_DIR", old);
    }
    result
}

/// Renders a minimal front page matching the structural selectors: the
/// seventh child of `#maincontent` is the pair table, whose second row holds
/// the English column in the first cell and the German column in the second.
pub(crate) fn browse_page(english_links: &[(&str, &str)], german_links: &[(&str, &str)]) -> String {
    let column = |links: &[(&str, &str)]| {
        links
            .iter()
            .map(|(href, label)| format!("<a href=\"{href}\">{label}</a><br>"))
            .collect::<String>()
    };
    let english = if english_links.is_empty() {
        "<td></td>".to_string()
    } else {
        format!("<td>{}</td>", column(english_links))
    };
    let german = if german_links.is_empty() {
        "<td></td>".to_string()
    } else {
        format!("<td>{}</td>", column(german_links))
    };

    format!(
        "<!DOCTYPE html>\n<html><head><title>dict.cc</title></head><body>\n\
         <div id=\"maincontent\">\n\
         <div class=\"logo\"></div>\n\
         <form action=\"/\"></form>\n\
         <p>intro</p>\n\
         <p>more intro</p>\n\
         <div class=\"banner\"></div>\n\
         <p>even more</p>\n\
         <table>\n\
         <tr><td><b>English</b></td><td><b>Deutsch</b></td></tr>\n\
         <tr>{english}{german}</tr>\n\
         </table>\n\
         </div>\n\
         </body></html>\n"
    )
}
