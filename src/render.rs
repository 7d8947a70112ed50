use tera::Tera;

use crate::error::SiteError;

/// Body served for every 404, public pages included.
///
/// Kept static so the error-to-response conversion needs no template
/// state.
pub const NOT_FOUND_HTML: &str = "<!DOCTYPE html>\n<html>\n<head><title>Not Found</title></head>\n<body><h1>404 - Not Found</h1></body>\n</html>\n";

/// Load the template set from a directory.
///
/// Templates are addressed relative to the directory, e.g.
/// `pages/home.html`. Tera autoescapes `.html` output; the detail page
/// opts out for the preparation step only when the recipe marks it as
/// markup.
pub fn load_templates(dir: &str) -> Result<Tera, SiteError> {
    let pattern = format!("{}/**/*.html", dir.trim_end_matches('/'));
    Ok(Tera::new(&pattern)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_templates_from_repo_dir() {
        let tera = load_templates("templates").unwrap();
        let names: Vec<_> = tera.get_template_names().collect();
        assert!(names.contains(&"pages/home.html"));
        assert!(names.contains(&"pages/category.html"));
        assert!(names.contains(&"pages/recipe-view.html"));
    }

    #[test]
    fn test_trailing_slash_in_dir_is_tolerated() {
        assert!(load_templates("templates/").is_ok());
    }
}
