//! HTML rendering for the browser front end. Plain strings, no templating
//! engine; every user-supplied value goes through `html_escape`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::analysis::catalog::role_names;
use crate::analysis::join_or_none;
use crate::analysis::pipeline::FileAnalysis;
use crate::report::REPORT_MIME;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
form label { display: block; margin-top: 1rem; font-weight: 600; }
textarea { width: 100%; min-height: 8rem; }
.metrics { display: flex; gap: 2rem; }
.metric { font-size: 1.6rem; }
.banner { padding: .6rem 1rem; border-radius: 6px; margin: .5rem 0; }
.success { background: #e6f4ea; }
.warning { background: #fff4e5; }
.error { background: #fdecea; }
.notice { background: #e8f0fe; }
"#;

/// Values echoed back into the form after a submission.
#[derive(Debug, Default)]
pub struct FormState<'a> {
    pub job_description: &'a str,
    pub job_role: Option<&'a str>,
    pub notice: Option<&'a str>,
}

/// Full page: the upload form followed by any per-file results.
pub fn render_page(form: &FormState<'_>, results: &[FileAnalysis]) -> String {
    let body: String = results.iter().map(render_result).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>IntelliScan - Resume Analyzer</title>
<style>{STYLE}</style>
</head>
<body>
<h1>IntelliScan - Resume Analyzer with PDF Export</h1>
{how_it_works}
{form}
{body}
</body>
</html>"#,
        how_it_works = HOW_IT_WORKS,
        form = render_form(form),
    )
}

const HOW_IT_WORKS: &str = r#"<details>
<summary>How it works</summary>
<ul>
<li>Upload one or more <strong>PDF or DOCX resumes</strong>.</li>
<li>Paste the <strong>job description</strong>.</li>
<li>Select a <strong>job role</strong> from the dropdown.</li>
<li>Get insights on skill match, job relevance and formatting, and download a full <strong>PDF report</strong>.</li>
</ul>
</details>"#;

fn render_form(form: &FormState<'_>) -> String {
    let options: String = role_names()
        .map(|role| {
            let selected = if form.job_role == Some(role) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = encode_double_quoted_attribute(role),
                label = encode_text(role),
            )
        })
        .collect();

    let notice = form
        .notice
        .map(|n| format!(r#"<div class="banner notice">{}</div>"#, encode_text(n)))
        .unwrap_or_default();

    format!(
        r#"{notice}
<form method="post" action="/analyze" enctype="multipart/form-data">
<label for="files">Upload your resumes (PDF/DOCX)</label>
<input id="files" type="file" name="files" accept=".pdf,.docx" multiple>
<label for="job_description">Paste Job Description Here</label>
<textarea id="job_description" name="job_description">{job_description}</textarea>
<label for="job_role">Select Job Role</label>
<select id="job_role" name="job_role">{options}</select>
<p><button type="submit">Analyze</button></p>
</form>"#,
        job_description = encode_text(form.job_description),
    )
}

fn render_result(result: &FileAnalysis) -> String {
    let analysis = &result.analysis;

    let sections = if analysis.is_well_structured() {
        r#"<div class="banner success">Resume is well-structured!</div>"#.to_string()
    } else {
        format!(
            r#"<div class="banner error">Missing Sections: {}</div>"#,
            encode_text(&analysis.missing_sections.join(", "))
        )
    };

    format!(
        r#"<hr>
<section>
<h2>Analysis for: <code>{file_name}</code></h2>
<div class="metrics">
<div>Skill Match<div class="metric">{skill:.2}%</div></div>
<div>Job Match<div class="metric">{job:.2}%</div></div>
</div>
<h3>Skills Overview</h3>
<div class="banner success">Matched Skills: {matched}</div>
<div class="banner warning">Missing Skills: {missing}</div>
<h3>Resume Formatting Check</h3>
{sections}
<p><a download="{report_name}" href="data:{mime};base64,{pdf}">Download Report for {file_name}</a></p>
</section>
"#,
        file_name = encode_text(&result.file_name),
        skill = analysis.skill_match_score,
        job = analysis.job_match_score,
        matched = encode_text(&join_or_none(&analysis.matched_skills)),
        missing = encode_text(&join_or_none(&analysis.missing_skills)),
        report_name = encode_double_quoted_attribute(&result.report_file_name),
        mime = REPORT_MIME,
        pdf = STANDARD.encode(&result.report_pdf),
    )
}
