//! Basic segmentation flow: split an article and print the grid and report.

use mandala_segment::{Result, segment};

const ARTICLE: &str = "\
Chunking is the act of cutting a long text into passages that can be read, linked and \
retrieved on their own. A file is rarely the right unit: it mixes topics and buries the \
useful sentence under everything around it.

Paragraphs are a better default. Authors already group one idea per paragraph, so a \
paragraph-sized chunk tends to carry one complete thought.

Some paragraphs run long. Those get regrouped sentence by sentence until each piece fits \
under the hard limit.

When the grid has more pieces than cells, the overflow folds into the last cell. When it \
has fewer, the empty cells invite a quote, a counterexample or a next step.";

fn main() -> Result<()> {
    let doc = segment(ARTICLE)?;

    println!("Grid:");
    for row in doc.cells.chunks(3) {
        let titles: Vec<_> = row.iter().map(|cell| cell.title.as_str()).collect();
        println!("  {}", titles.join(" | "));
    }

    println!("\n{}", doc.report());
    println!("\n{}", doc.to_markdown());

    Ok(())
}
