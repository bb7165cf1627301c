//! Terminal preview of produced terms.

use lexalign_core::term::Term;

/// Render one term as a single preview line.
fn display_term(term: &Term) -> String {
    format!(
        "{:>8.2}s {:>6.1}s  [{}]  {} ({:.0})",
        term.start, term.duration, term.speaker, term.best.word, term.best.score
    )
}

/// Display preview of terms (first and last entries).
pub fn preview_terms(terms: &[Term], head_count: usize, tail_count: usize) -> String {
    let total = terms.len();

    let mut out = Vec::new();

    if total <= head_count + tail_count {
        out.extend(terms.iter().map(display_term));
    } else {
        out.extend(terms[..head_count].iter().map(display_term));
        out.push("...".to_string());
        out.extend(terms[total - tail_count..].iter().map(display_term));
    }

    let mut rendered = out.join("\n");
    if !rendered.is_empty() {
        rendered.push('\n');
    }
    rendered
}
