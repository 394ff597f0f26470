use anyhow::{Context, Result};
use log::{debug, info, trace};
use std::{thread, time::Duration};

use crate::{
    error::LookupError,
    github::{RepoCoordinates, StarSource},
    types::{StarResult, Threshold},
};

/// Fetches the star count of every path, in order, keeping those the threshold accepts.
///
/// Repositories GitHub reports as missing (private, unpublished, deleted) are
/// skipped. Any other lookup failure aborts the whole run with the offending
/// path attached; a partial report would be misleading. Consecutive lookups
/// are spaced by `delay`.
pub fn enrich<S: StarSource + ?Sized>(
    paths: &[String],
    source: &S,
    threshold: Threshold,
    delay: Duration,
) -> Result<Vec<StarResult>> {
    info!("Fetching stars for {} repositories", paths.len());
    let mut results = Vec::new();

    for (idx, path) in paths.iter().enumerate() {
        if idx > 0 && !delay.is_zero() {
            // Dont get ratelimited.
            thread::sleep(delay);
        }

        let coords = RepoCoordinates::parse(path)?;
        trace!("Looking up {}/{} for {}", coords.owner, coords.repo, path);

        let stars = match source.stars(coords.owner, coords.repo) {
            Ok(stars) => stars,
            Err(LookupError::NotFound) => {
                info!("Skipping {}: repository not found (private or unpublished?)", path);
                continue;
            }
            Err(e) => return Err(e).with_context(|| format!("getting stars for {}", path)),
        };

        if threshold.keeps(stars) {
            trace!("Keeping {} ({} stars)", path, stars);
            results.push(StarResult { path: path.clone(), stars });
        } else {
            trace!("Filtered out {} ({} stars)", path, stars);
        }
    }

    debug!("Kept {} of {} repositories", results.len(), paths.len());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedPathError;
    use std::{cell::RefCell, collections::HashMap, time::Instant};

    fn paths(ps: &[&str]) -> Vec<String> {
        ps.iter().map(|s| s.to_string()).collect()
    }

    fn table(entries: &[(&str, u64)]) -> HashMap<String, u64> {
        entries.iter().map(|(repo, stars)| (repo.to_string(), *stars)).collect()
    }

    fn lookup(
        stars: &HashMap<String, u64>,
    ) -> impl Fn(&str, &str) -> Result<u64, LookupError> + '_ {
        move |owner, repo| stars.get(&format!("{owner}/{repo}")).copied().ok_or(LookupError::NotFound)
    }

    #[test]
    fn test_enrich_threshold_disabled_keeps_all() {
        let stars = table(&[("a/a", 5), ("b/b", 15), ("c/c", 10)]);
        let input = paths(&["github.com/a/a", "github.com/b/b", "github.com/c/c"]);

        let results = enrich(&input, &lookup(&stars), Threshold::Disabled, Duration::ZERO).unwrap();
        let got: Vec<(&str, u64)> = results.iter().map(|r| (r.path.as_str(), r.stars)).collect();
        assert_eq!(got, vec![("github.com/a/a", 5), ("github.com/b/b", 15), ("github.com/c/c", 10)]);
    }

    #[test]
    fn test_enrich_threshold_keeps_fewer_stars() {
        let stars = table(&[("a/a", 5), ("b/b", 15), ("c/c", 10)]);
        let input = paths(&["github.com/a/a", "github.com/b/b", "github.com/c/c"]);

        let results =
            enrich(&input, &lookup(&stars), Threshold::from_flag(10), Duration::ZERO).unwrap();
        assert_eq!(results, vec![StarResult { path: "github.com/a/a".to_string(), stars: 5 }]);
    }

    #[test]
    fn test_enrich_preserves_input_order() {
        let stars = table(&[("z/z", 1), ("m/m", 1000), ("a/a", 50)]);
        let input = paths(&["github.com/z/z", "github.com/m/m", "github.com/a/a"]);

        let results = enrich(&input, &lookup(&stars), Threshold::Disabled, Duration::ZERO).unwrap();
        let order: Vec<&str> = results.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(order, vec!["github.com/z/z", "github.com/m/m", "github.com/a/a"]);
    }

    #[test]
    fn test_enrich_skips_not_found() {
        let stars = table(&[("a/a", 3), ("c/c", 7)]);
        let input = paths(&["github.com/a/a", "github.com/private/b", "github.com/c/c"]);

        let results = enrich(&input, &lookup(&stars), Threshold::Disabled, Duration::ZERO).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.path != "github.com/private/b"));
    }

    #[test]
    fn test_enrich_subpackages_use_repo_root() {
        let stars = table(&[("aws/aws-sdk-go", 8000)]);
        let input = paths(&["github.com/aws/aws-sdk-go/aws", "github.com/aws/aws-sdk-go/service/s3"]);

        let results = enrich(&input, &lookup(&stars), Threshold::Disabled, Duration::ZERO).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.stars == 8000));
    }

    #[test]
    fn test_enrich_transport_failure_aborts() {
        let calls = RefCell::new(Vec::new());
        let source = |owner: &str, repo: &str| -> Result<u64, LookupError> {
            calls.borrow_mut().push(format!("{owner}/{repo}"));
            if repo == "b" {
                Err(LookupError::Status { status: 502, body: "bad gateway".to_string() })
            } else {
                Ok(1)
            }
        };
        let input = paths(&["github.com/a/a", "github.com/b/b", "github.com/c/c"]);

        let err = enrich(&input, &source, Threshold::Disabled, Duration::ZERO).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("getting stars for github.com/b/b"), "{msg}");
        assert!(msg.contains("502"), "{msg}");
        assert!(matches!(err.downcast_ref::<LookupError>(), Some(LookupError::Status { .. })));
        // No lookups after the failure
        assert_eq!(*calls.borrow(), vec!["a/a", "b/b"]);
    }

    #[test]
    fn test_enrich_malformed_path() {
        let stars = table(&[("a/a", 1)]);
        let input = paths(&["github.com/a/a", "github.com/broken"]);

        let err = enrich(&input, &lookup(&stars), Threshold::Disabled, Duration::ZERO).unwrap_err();
        let malformed = err.downcast_ref::<MalformedPathError>().unwrap();
        assert_eq!(malformed.path, "github.com/broken");
    }

    #[test]
    fn test_enrich_empty() {
        let source = |_: &str, _: &str| -> Result<u64, LookupError> { panic!("no lookups expected") };
        let results = enrich(&[], &source, Threshold::Below(1), Duration::from_secs(60)).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_enrich_sleeps_between_lookups() {
        let stars = table(&[("a/a", 1), ("b/b", 2), ("c/c", 3)]);
        let input = paths(&["github.com/a/a", "github.com/b/b", "github.com/c/c"]);
        let delay = Duration::from_millis(20);

        let start = Instant::now();
        enrich(&input, &lookup(&stars), Threshold::Disabled, delay).unwrap();
        assert!(start.elapsed() >= delay * 2);
    }
}
