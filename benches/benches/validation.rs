use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use graphql_linter::{LintConfig, Validator};
use graphql_schema::Schema;
use graphql_test_utils::fixtures::DEPRECATION_SCHEMA;
use graphql_test_utils::init_tracing;
use std::hint::black_box;

// Operation touching every rule: variables, nested selections, inline
// fragments, enum arguments and deprecated fields
const SAMPLE_OPERATION: &str = r#"
query GetFeed($status: Status = PUBLISHED, $first: Int) {
  user(id: 1) {
    id
    name
    username
    friends {
      id
      name
      posts {
        id
        title
        comments { id body }
      }
    }
  }
  posts(status: $status, order: [ASC, DESC], filter: { statuses: [DRAFT, ARCHIVED] }) {
    id
    title
    author { ...AuthorFields }
  }
  search(term: "graphql") {
    ... on User { id handle }
    ... on Post { id status }
  }
}

fragment AuthorFields on User {
  id
  fullName
  nickname
}
"#;

fn validator() -> Validator {
    let config: LintConfig = serde_json::from_str(
        r#"{
            "extends": "recommended",
            "rules": { "required_fields": ["error", { "requiredFields": ["id"] }] }
        }"#,
    )
    .unwrap();
    Validator::from_config(&config).unwrap()
}

/// SDL loading benchmark
fn bench_schema_from_sdl(c: &mut Criterion) {
    init_tracing();
    c.bench_function("schema_from_sdl", |b| {
        b.iter(|| black_box(Schema::from_sdl(black_box(DEPRECATION_SCHEMA))));
    });
}

/// Full pass over a pre-parsed document
fn bench_validate_parsed(c: &mut Criterion) {
    c.bench_function("validate_parsed", |b| {
        let schema = Schema::from_sdl(DEPRECATION_SCHEMA).unwrap();
        let validator = validator();
        let tree = apollo_parser::Parser::new(SAMPLE_OPERATION).parse();

        b.iter(|| black_box(validator.validate(&schema, &tree)));
    });
}

/// Parse plus validation, as a host would call it per document
fn bench_validate_source(c: &mut Criterion) {
    c.bench_function("validate_source", |b| {
        let schema = Schema::from_sdl(DEPRECATION_SCHEMA).unwrap();
        let validator = validator();

        b.iter(|| black_box(validator.validate_source(&schema, black_box(SAMPLE_OPERATION))));
    });
}

/// Building the rule set from configuration
fn bench_from_config(c: &mut Criterion) {
    c.bench_function("validator_from_config", |b| {
        b.iter_batched(
            LintConfig::recommended,
            |config| black_box(Validator::from_config(&config)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_schema_from_sdl,
    bench_validate_parsed,
    bench_validate_source,
    bench_from_config,
);
criterion_main!(benches);
