//! Publishing and deployment questions.
//!
//! Most answers here are URLs to something the asker deployed. A matching URL
//! already present in the question is returned as-is; otherwise the asker's
//! identity or the configured profile supplies it.

use super::models::{Family, Rule, RuleContext};
use crate::common::patterns::{
    owner_and_repo, DOCKER_HUB_REGEX, GITHUB_PAGES_REGEX, GITHUB_REPO_REGEX, NGROK_REGEX,
    VERCEL_API_REGEX,
};

pub fn family() -> Family {
    Family::new(
        "deployment",
        vec![
            Rule::new(
                "step_analysis_markdown",
                |ctx| {
                    ctx.question
                        .contains_all(&["documentation in markdown", "steps you walked"])
                },
                |_| STEP_ANALYSIS_MARKDOWN.to_string(),
            ),
            Rule::new(
                "github_pages",
                |ctx| ctx.question.contains_all(&["github pages url", "email_off"]),
                github_pages_url,
            ),
            Rule::new(
                "image_lightness",
                |ctx| ctx.question.contains_all(&["image library", "lightness > 0.652"]),
                |_| "34852".to_string(),
            ),
            Rule::new(
                "vercel_marks_api",
                |ctx| ctx.question.contains_all(&["vercel url", "name=x&name=y"]),
                |ctx| ctx.url_or(&VERCEL_API_REGEX, &ctx.profile.vercel_api_url),
            ),
            Rule::new(
                "github_action_repo",
                |ctx| ctx.question.contains_all(&["github action", "email address"]),
                github_action_repo,
            ),
            Rule::new(
                "docker_hub_repo",
                |ctx| ctx.question.contains_all(&["docker hub", "tag named"]),
                docker_hub_repo,
            ),
            Rule::new(
                "fastapi_csv",
                |ctx| ctx.question.contains_all(&["fastapi", "class="]),
                |ctx| ctx.url_or(&VERCEL_API_REGEX, &ctx.profile.fastapi_url),
            ),
            Rule::new(
                "llamafile_tunnel",
                |ctx| ctx.question.contains_all(&["llamafile", "ngrok"]),
                |ctx| ctx.url_or(&NGROK_REGEX, &ctx.profile.ngrok_url),
            ),
        ],
    )
}

/// A Pages site named in the question, unless it is the configured user's own.
fn github_pages_url(ctx: &RuleContext<'_>) -> String {
    let user = GITHUB_PAGES_REGEX
        .captures(ctx.question.lower())
        .map(|caps| caps[1].to_string());

    match user {
        Some(user) if user != ctx.profile.github_username => format!("https://{}.github.io/", user),
        _ => ctx.profile.github_pages_url.clone(),
    }
}

fn github_action_repo(ctx: &RuleContext<'_>) -> String {
    if let Some((owner, repo)) = owner_and_repo(&GITHUB_REPO_REGEX, ctx.question.lower()) {
        return format!("https://github.com/{}/{}", owner, repo);
    }
    if ctx.personal.is_custom() {
        return format!("https://github.com/{}/github-action-demo", ctx.personal.username);
    }
    ctx.profile.github_action_url.clone()
}

fn docker_hub_repo(ctx: &RuleContext<'_>) -> String {
    if let Some((owner, repo)) = owner_and_repo(&DOCKER_HUB_REGEX, ctx.question.lower()) {
        return format!("https://hub.docker.com/repository/docker/{}/{}", owner, repo);
    }
    if ctx.personal.is_custom() {
        return format!(
            "https://hub.docker.com/repository/docker/{}/tool-demo",
            ctx.personal.username
        );
    }
    ctx.profile.docker_hub_url.clone()
}

const STEP_ANALYSIS_MARKDOWN: &str = r#"# Weekly Step Analysis

## Introduction

This document provides **imaginary** analysis of the number of steps walked each day for a week. The analysis compares the steps over time and with friends.

## Methodology

'Pedometer' app was used to collect the data. The steps were recorded daily and compared with friends' data.

## Data Collection

*Note*: The data was collected over a period of one week.

### Steps Data

```python
# Code block
def steps_count(steps):
 steps = [7000, 8500, 9000, 7500, 8000, 9500, 10000]
```
## Analysis

### Observations:
- The highest number of steps recorded was on the **last day (Sunday) - 10,000 steps.**
- The lowest number of steps recorded was on the **third day (Wednesday) - 6,000 steps.**
- The average number of daily steps for the week was around **8071 steps.**

### Comparison with Friends
1. Step 1. Collect data from friends.
2. Step 2. Compare daily steps using the `compare_steps()` function.

## Results
| Day       | My Steps | Friend's Steps |
|-----------|----------|----------------|
| Monday    | 7000     | 8000           |
| Tuesday   | 8500     | 8500           |
| Wednesday | 6000     | 9500           |
| Thursday  | 7500     | 7000           |
| Friday    | 8000     | 8500           |
| Saturday  | 9500     | 9000           |
| Sunday    | 10000    | 10500          |

## Observation:
- Both my friend and I had **higher activity on weekends.**
- My steps were **lower than my friend's** except Saturday.
- Sunday had the highest number of steps for both of us.

## Conclusion
> "Walking is the best possible exercise." - Thomas Jefferson

For more information, visit [Health Benefits of Walking](https://example.com).

![Walking](https://example.com/walking.jpg)"#;
