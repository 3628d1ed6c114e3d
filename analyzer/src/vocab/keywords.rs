pub(crate) const KEYWORDS: &[&str] = &[
    "ALL",
    "AND",
    "ANY",
    "AS",
    "ASC",
    "ASSERT",
    "BY",
    "CACHE",
    "COGROUP",
    "CROSS",
    "CUBE",
    "DEFINE",
    "DENSE",
    "DESC",
    "DESCRIBE",
    "DISTINCT",
    "DUMP",
    "EXEC",
    "EXPLAIN",
    "FALSE",
    "FILTER",
    "FLATTEN",
    "FOREACH",
    "FULL",
    "GENERATE",
    "GROUP",
    "IF",
    "ILLUSTRATE",
    "IMPORT",
    "INNER",
    "INPUT",
    "INTO",
    "IS",
    "JOIN",
    "LEFT",
    "LIMIT",
    "LOAD",
    "MAPREDUCE",
    "MATCHES",
    "NOT",
    "NULL",
    "ONSCHEMA",
    "OR",
    "ORDER",
    "OTHERWISE",
    "OUTER",
    "OUTPUT",
    "PARALLEL",
    "PARTITION",
    "RANK",
    "REGISTER",
    "RETURNS",
    "RIGHT",
    "ROLLUP",
    "RUN",
    "SAMPLE",
    "SET",
    "SHIP",
    "SPLIT",
    "STDERROR",
    "STDIN",
    "STDOUT",
    "STORE",
    "STREAM",
    "THROUGH",
    "TRUE",
    "UNION",
    "USING",
];

pub(crate) const TYPES: &[&str] = &[
    "boolean",
    "int",
    "long",
    "float",
    "double",
    "chararray",
    "bytearray",
    "bag",
    "tuple",
    "map",
];
