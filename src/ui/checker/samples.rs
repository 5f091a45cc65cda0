/// Built-in articles for trying the checker without pasting text.
pub const SAMPLE_ARTICLES: [&str; 3] = [
    "Scientists at MIT have discovered a new renewable energy source that could replace fossil fuels. The research, published in Nature, shows promising results from initial tests.",
    "SHOCKING: Secret government files reveal unbelievable truth they don't want you to know! Click here to learn more about this conspiracy.",
    "The stock market closed higher today as investors responded positively to the latest economic data. The S&P 500 gained 1.2% while the Dow Jones increased by 0.8%.",
];
