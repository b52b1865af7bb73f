/// Search tab query worker (debounce, de-duplication, latest-wins).
pub mod search;
