//! Shared test fixtures for GraphQL schemas.
//!
//! Use these for tests that don't need custom schemas. For tests where the
//! schema structure is important to the test case, prefer inline fixtures
//! to keep the test self-documenting.

use graphql_schema::Schema;

/// Minimal schema with just Query and a User type.
pub const BASIC_SCHEMA: &str = r#"
type Query {
    user(id: ID!): User
    users: [User!]!
}

type User {
    id: ID!
    name: String!
    email: String!
}
"#;

/// Schema with nested types, deprecations, enums and input objects.
///
/// Includes:
/// - `User -> Post -> Comment` chain, each with an `id` field
/// - `Stats`, an object type without an `id` field
/// - `User.username` deprecated with a reason, `User.nickname` deprecated
///   with `reason: null`, `User.handle` deprecated with the default reason
/// - `Status.ARCHIVED` deprecated with a reason, `Status.HIDDEN` without
/// - `Node` interface and `SearchResult` union
pub const DEPRECATION_SCHEMA: &str = r#"
type Query {
    user(id: ID!): User
    users: [User!]!
    posts(status: Status, order: [Order!], filter: PostFilter): [Post!]!
    node(id: ID!): Node
    search(term: String!): [SearchResult!]!
    stats: Stats
    oldUser(id: ID!): User @deprecated(reason: "Use user instead.")
}

type Mutation {
    publish(id: ID!, status: Status!): Post
}

interface Node {
    id: ID!
}

type User implements Node {
    id: ID!
    name: String!
    fullName: String!
    email: String!
    username: String @deprecated(reason: "Use fullName instead.")
    nickname: String @deprecated(reason: null)
    handle: String @deprecated
    posts: [Post!]!
    friends: [User!]!
}

type Post implements Node {
    id: ID!
    title: String!
    status: Status!
    author: User!
    comments: [Comment!]!
}

type Comment {
    id: ID!
    body: String!
}

type Stats {
    count: Int!
}

union SearchResult = User | Post

enum Status {
    DRAFT
    PUBLISHED
    ARCHIVED @deprecated(reason: "Use DRAFT instead.")
    HIDDEN @deprecated(reason: null)
}

enum Order {
    ASC
    DESC
}

input PostFilter {
    status: Status
    statuses: [Status!]
    authorId: ID
}
"#;

/// Build a [`Schema`] from SDL, panicking on invalid fixtures.
pub fn schema_from(sdl: &str) -> Schema {
    Schema::from_sdl(sdl).unwrap_or_else(|err| panic!("invalid fixture schema: {err}"))
}

/// The [`DEPRECATION_SCHEMA`] fixture as a [`Schema`].
pub fn test_schema() -> Schema {
    schema_from(DEPRECATION_SCHEMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_build() {
        let basic = schema_from(BASIC_SCHEMA);
        assert!(basic.get_type("User").is_some());

        let schema = test_schema();
        assert_eq!(schema.query_type.as_deref(), Some("Query"));
        assert_eq!(schema.mutation_type.as_deref(), Some("Mutation"));
        assert!(schema.get_type("Status").is_some());
    }
}
