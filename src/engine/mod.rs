mod summarizer;
#[cfg(test)]
mod tests;

pub use summarizer::process;
