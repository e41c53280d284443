/// Instructions sent ahead of every description.
pub const SCHEMA_INSTRUCTIONS: &str = "you design relational schemas for sqlite. \
     output only sql create table statements, each terminated by a semicolon. \
     use create table if not exists. \
     no markdown, no commentary, no backticks.";

/// Embed a natural-language description in the fixed prompt template.
pub fn build_schema_prompt(description: &str) -> String {
    format!(
        "{}\n\n\
         design the tables for the following system.\n\
         - give every table an integer primary key.\n\
         - express relationships with foreign key clauses.\n\
         - keep types and constraints simple and portable.\n\n\
         description:\n{}\n",
        SCHEMA_INSTRUCTIONS,
        description.trim()
    )
}
