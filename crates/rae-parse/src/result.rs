use crate::normalize::normalize_text;
use rae_model::{Candidate, RaeError, RetrievalResult, Sense, FETCH_ACTION};
use scraper::{ElementRef, Html, Selector};

/// Parse a result page, stripping the default fetch action from candidate links.
pub fn parse_result(html: &str) -> Result<RetrievalResult, RaeError> {
    parse_result_with(html, FETCH_ACTION)
}

/// Parse a result page into a [`RetrievalResult`].
///
/// A page listing links (`ul > li > a`) is a disambiguation page; each
/// link's target minus `fetch_action` is the candidate's entry id. Any
/// other page is a single entry with one sense per paragraph. A page with
/// neither yields an empty single result.
pub fn parse_result_with(html: &str, fetch_action: &str) -> Result<RetrievalResult, RaeError> {
    let document = Html::parse_document(html);

    let anchor_sel = Selector::parse("body ul li a").expect("valid selector");
    let anchors: Vec<ElementRef> = document.select(&anchor_sel).collect();

    if !anchors.is_empty() {
        let items = anchors
            .iter()
            .map(|anchor| candidate(anchor, fetch_action))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(candidates = items.len(), "Parsed disambiguation page");
        return Ok(RetrievalResult::Disambiguation { items });
    }

    let paragraph_sel = Selector::parse("body p").expect("valid selector");
    let items: Vec<Sense> = document
        .select(&paragraph_sel)
        .map(|p| Sense {
            text: element_text(p),
        })
        .collect();
    tracing::debug!(senses = items.len(), "Parsed entry page");

    Ok(RetrievalResult::Single { items })
}

fn candidate(anchor: &ElementRef, fetch_action: &str) -> Result<Candidate, RaeError> {
    let text = element_text(*anchor);
    let href = anchor
        .value()
        .attr("href")
        .ok_or_else(|| RaeError::Parser(format!("candidate \"{text}\" has no link")))?;

    let id = href.replacen(fetch_action, "", 1);
    if id.is_empty() {
        return Err(RaeError::Parser(format!(
            "candidate \"{text}\" links to no entry id"
        )));
    }

    Ok(Candidate { text, id })
}

fn element_text(element: ElementRef) -> String {
    normalize_text(&element.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disambiguation_page() {
        let html = r#"
            <html><body>
            <ul>
              <li><a data-acc="haber" data-cat="FETCH" data-eti="haber" title="Ir a la entrada"
                     href="fetch?id=JzTJ1Tq">haber<sup>1</sup></a></li>
              <li><a href="fetch?id=JzVlfj8">haber<sup>2</sup></a></li>
              <li><a href="fetch?id=Jzc0Iu3">haberes</a></li>
            </ul>
            </body></html>
        "#;
        let result = parse_result(html).unwrap();
        assert!(result.multiple_matches());
        assert_eq!(
            result,
            RetrievalResult::Disambiguation {
                items: vec![
                    Candidate { text: "haber1".into(), id: "JzTJ1Tq".into() },
                    Candidate { text: "haber2".into(), id: "JzVlfj8".into() },
                    Candidate { text: "haberes".into(), id: "Jzc0Iu3".into() },
                ],
            }
        );
    }

    #[test]
    fn test_list_wins_over_paragraphs() {
        let html = r#"
            <html><body>
            <p>Aviso: varias entradas.</p>
            <ul><li><a href="fetch?id=A1">uno</a></li></ul>
            </body></html>
        "#;
        let result = parse_result(html).unwrap();
        assert!(result.multiple_matches());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_single_entry_paragraphs() {
        let html = r#"
            <html><body>
            <article>
              <header>casa</header>
              <p class="j">1. f. Edificio para habitar.</p>
              <p class="j">2. f. Edificio, piso o parte de él en que vive
                 una persona o una familia.</p>
            </article>
            </body></html>
        "#;
        let result = parse_result(html).unwrap();
        assert_eq!(
            result,
            RetrievalResult::Single {
                items: vec![
                    Sense { text: "1. f. Edificio para habitar.".into() },
                    Sense {
                        text: "2. f. Edificio, piso o parte de él en que vive una persona o una familia."
                            .into()
                    },
                ],
            }
        );
        assert!(result.entries().iter().all(|e| e.id.is_none()));
    }

    #[test]
    fn test_empty_page_is_not_an_error() {
        let html = "<html><body><div>Aviso: La palabra no está en el Diccionario.</div></body></html>";
        let result = parse_result(html).unwrap();
        assert_eq!(result, RetrievalResult::empty());
    }

    #[test]
    fn test_anchor_without_href() {
        let html = r#"<html><body><ul><li><a>haber</a></li></ul></body></html>"#;
        let err = parse_result(html).unwrap_err();
        assert!(matches!(err, RaeError::Parser(_)));
    }

    #[test]
    fn test_anchor_without_id() {
        let html = r#"<html><body><ul><li><a href="fetch?id=">haber</a></li></ul></body></html>"#;
        assert!(matches!(parse_result(html), Err(RaeError::Parser(_))));
    }

    #[test]
    fn test_custom_fetch_action() {
        let html = r#"<html><body><ul><li><a href="/srv/fetch?id=X9">x</a></li></ul></body></html>"#;
        let result = parse_result_with(html, "/srv/fetch?id=").unwrap();
        assert_eq!(result.entries()[0].id.as_deref(), Some("X9"));
    }
}
