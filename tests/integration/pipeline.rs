//! End-to-end runs of the papersync binary against scratch documents.

use rstest::{fixture, rstest};

use crate::fixtures::SyncTestContext;

#[fixture]
fn readme() -> &'static str {
	r#"# Awesome LLM Reasoning Papers

Curated list, newest first.

| Time | Venue | Paper | Research Question/Idea | Method | Remark | Bib |
| :--- | :--- | :--- | :--- | :--- | :--- | :--- |
| 2024.05 | ICML | [Chain of Thought](https://arxiv.org/abs/2201.11903) | **Does prompting elicit reasoning?** | **Few-shot** prompting | $\checkmark$ | [bibtex](refs.bib#cot) |
| 2023.12 | NeurIPS | [Self-Consistency](https://arxiv.org/abs/2203.11171) | Sampling **diverse** reasoning paths | Majority vote | solid gains | |

## License

MIT
"#
}

#[fixture]
fn page() -> &'static str {
	r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Awesome LLM Reasoning Papers</title>
</head>
<body>
    <table id="papers"></table>
    <script>
        const data = [
            { "time": "stale" }
        ];
        const table = document.getElementById("papers");
        for (const row of data) {
            table.insertAdjacentHTML("beforeend", `<tr><td>${row.time}</td><td>${row.paper}</td></tr>`);
        }
    </script>
</body>
</html>
"#
}

/// Pull the injected array text back out of the page, without the `;`.
fn embedded_json(html: &str) -> &str {
	let start = html.find("const data = ").expect("data statement present") + "const data = ".len();
	let rel_end = html[start..].find("];").expect("array terminator present");
	&html[start..start + rel_end + 1]
}

#[rstest]
fn test_sync_updates_page(readme: &str, page: &str) {
	let ctx = SyncTestContext::with_files(readme, page);

	let (stdout, stderr) = ctx.run_captured();
	assert!(stdout.contains("Successfully updated index.html with 2 entries."), "stdout was: {stdout}");
	assert!(!stderr.contains("Error"), "stderr was: {stderr}");

	let html = ctx.read("index.html");
	assert!(!html.contains("stale"));
	// the rest of the script block survives the splice
	assert!(html.contains("insertAdjacentHTML"));

	let rows: serde_json::Value = serde_json::from_str(embedded_json(&html)).expect("injected JSON parses");
	let rows = rows.as_array().expect("array of entries");
	assert_eq!(rows.len(), 2);
	assert_eq!(rows[0]["paper"], r#"<a href="https://arxiv.org/abs/2201.11903">Chain of Thought</a>"#);
	assert_eq!(rows[0]["question"], "<strong>Does prompting elicit reasoning?</strong>");
	assert_eq!(rows[0]["method"], "<strong>Few-shot</strong> prompting");
	assert_eq!(rows[0]["remark"], r"$\checkmark$");
	assert_eq!(rows[0]["bib"], "[bibtex](refs.bib#cot)");
	assert_eq!(rows[1]["venue"], "NeurIPS");
	assert_eq!(rows[1]["question"], "Sampling <strong>diverse</strong> reasoning paths");
	assert_eq!(rows[1]["bib"], "");
}

#[rstest]
fn test_sync_idempotent(readme: &str, page: &str) {
	let ctx = SyncTestContext::with_files(readme, page);

	let (stdout, _) = ctx.run_captured();
	assert!(stdout.contains("with 2 entries."));
	let after_first = ctx.read("index.html");

	let (stdout, _) = ctx.run_captured();
	assert!(stdout.contains("with 2 entries."));
	let after_second = ctx.read("index.html");

	assert_eq!(after_first, after_second, "re-running on an already updated page must not change it");
}

#[rstest]
fn test_missing_readme(page: &str) {
	let ctx = SyncTestContext::new();
	ctx.write("index.html", page);

	let (stdout, stderr) = ctx.run_captured();
	assert!(stderr.contains("Error: README.md not found."), "stderr was: {stderr}");
	assert!(!stdout.contains("Successfully"));
	assert_eq!(ctx.read("index.html"), page);
}

#[rstest]
fn test_header_not_found(page: &str) {
	let ctx = SyncTestContext::with_files("# Just prose\n\nNo table here.\n", page);

	let (stdout, stderr) = ctx.run_captured();
	assert!(stderr.contains("Error: Could not find the table header in README.md"), "stderr was: {stderr}");
	assert!(!stdout.contains("Successfully"));
	assert_eq!(ctx.read("index.html"), page);
}

#[rstest]
fn test_missing_page(readme: &str) {
	let ctx = SyncTestContext::new();
	ctx.write("README.md", readme);

	let (stdout, stderr) = ctx.run_captured();
	assert!(stderr.contains("Error: index.html not found."), "stderr was: {stderr}");
	assert!(!stdout.contains("Successfully"));
	assert!(!ctx.exists("index.html"));
}

#[rstest]
fn test_anchor_not_found(readme: &str) {
	let page = "<script>\n    let data = [];\n</script>\n";
	let ctx = SyncTestContext::with_files(readme, page);

	let (stdout, stderr) = ctx.run_captured();
	assert!(stderr.contains("Error: Could not find 'const data = [...]' in index.html"), "stderr was: {stderr}");
	assert!(!stdout.contains("Successfully"));
	assert_eq!(ctx.read("index.html"), page);
}

#[rstest]
fn test_header_without_rows_skips_injection(page: &str) {
	let readme = "| Time | Venue | Paper | Research Question/Idea | Method | Remark | Bib |\n\n## License\n";
	let ctx = SyncTestContext::with_files(readme, page);

	let (stdout, stderr) = ctx.run_captured();
	assert!(!stdout.contains("Successfully"));
	assert!(!stderr.contains("Error"));
	// nothing to inject, the page keeps its stale array
	assert!(ctx.read("index.html").contains("stale"));
}
