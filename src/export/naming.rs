//! Output file naming.

/// Collapse every run of whitespace in the title into a single underscore.
/// Everything else, punctuation included, is kept as typed.
pub fn title_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_gap = false;

    for c in title.chars() {
        if c.is_whitespace() {
            if !in_gap {
                slug.push('_');
                in_gap = true;
            }
        } else {
            slug.push(c);
            in_gap = false;
        }
    }

    slug
}

pub fn chart_file_name(title: &str) -> String {
    format!("{}_chart.png", title_slug(title))
}

pub fn legend_file_name(title: &str) -> String {
    format!("{}_legend.png", title_slug(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_whitespace_is_replaced() {
        assert_eq!(chart_file_name("My Data!"), "My_Data!_chart.png");
        assert_eq!(legend_file_name("My Data!"), "My_Data!_legend.png");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(title_slug("Microorganism Distribution"), "Microorganism_Distribution");
        assert_eq!(title_slug("a \t\n b"), "a_b");
        assert_eq!(title_slug("  padded  "), "_padded_");
        assert_eq!(title_slug(""), "");
        assert_eq!(chart_file_name(""), "_chart.png");
    }
}
