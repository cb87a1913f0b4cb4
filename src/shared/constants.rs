/// Number of questions returned per page on every paginated endpoint
pub const QUESTIONS_PER_PAGE: usize = 10;
