//! Plain-text job cards for terminal output

use skillmatch_similarity::ScoredResult;
use std::io::{self, Write};

/// Write a heading followed by one card per result
pub fn write_text<W: Write>(
    out: &mut W,
    skills: &[String],
    top_n: usize,
    results: &[ScoredResult<'_>],
) -> io::Result<()> {
    writeln!(out, "Top {} job matches for: {}", top_n, skills.join(", "))?;

    if results.is_empty() {
        writeln!(out)?;
        writeln!(out, "No job postings in catalog.")?;
        return Ok(());
    }

    for (rank, result) in results.iter().enumerate() {
        let info = &result.posting.info;
        writeln!(out)?;
        writeln!(out, "{}. {}", rank + 1, info.designation)?;
        writeln!(out, "   {}", info.company_name)?;
        writeln!(out, "   Location: {} | Industry: {}", info.location, info.industry)?;
        writeln!(out, "   Level: {} | Involvement: {}", info.level, info.involvement)?;
        writeln!(out, "   Match score: {:.2}%", result.percent())?;
        if !result.matched_skills.is_empty() {
            writeln!(out, "   Matched skills: {}", result.matched_skills.join(", "))?;
        }
    }
    Ok(())
}
