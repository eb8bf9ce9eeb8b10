use core_types::Article;

/// Used when no article mentions the fund.
pub const GENERAL_MARKET_PROMPT: &str = "You are a financial analyst. Provide a general market and sentiment analysis for mutual fund investors in the current global scenario.";

/// Builds the model prompt for `fund_name`.
///
/// With articles, the first `max_articles` headlines are quoted one per
/// paragraph after the instruction. Without any, the general market prompt is
/// used instead.
pub fn build_prompt(fund_name: &str, articles: &[Article], max_articles: usize) -> String {
    if articles.is_empty() {
        return GENERAL_MARKET_PROMPT.to_string();
    }

    let quoted = articles
        .iter()
        .take(max_articles)
        .map(Article::headline)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Based on the following news articles, analyze the sentiment, risk, and sectoral performance impacts for the mutual fund '{fund_name}':\n\n{quoted}"
    )
}
