//! Pig built-in functions, one canonical spelling per entry.
//!
//! An entry may list several functions separated by whitespace; each word is a separate
//! invocable name.

const EVAL: &[&str] = &[
    "AVG",
    "BagToString",
    "BagToTuple",
    "Bloom",
    "BuildBloom",
    "CONCAT",
    "COUNT",
    "COUNT_STAR",
    "DIFF",
    "IsEmpty",
    "MAX",
    "MIN",
    "PluckTuple",
    "SIZE",
    "SUBTRACT",
    "SUM",
    "TOKENIZE",
];

const MATH: &[&str] = &[
    "ABS", "ACOS", "ASIN", "ATAN", "CBRT", "CEIL", "COS", "COSH", "EXP", "FLOOR", "LOG",
    "LOG10", "RANDOM", "ROUND", "ROUND_TO", "SIN", "SINH", "SQRT", "TAN", "TANH",
];

const STRING: &[&str] = &[
    "ENDSWITH",
    "EqualsIgnoreCase",
    "INDEXOF",
    "LAST_INDEX_OF",
    "LCFIRST",
    "LOWER",
    "LTRIM",
    "REGEX_EXTRACT",
    "REGEX_EXTRACT_ALL",
    "REPLACE",
    "RTRIM",
    "STARTSWITH",
    "STRSPLIT",
    "STRSPLITTOBAG",
    "SUBSTRING",
    "TRIM",
    "UCFIRST",
    "UPPER",
];

const DATETIME: &[&str] = &[
    "AddDuration",
    "CurrentTime",
    "DaysBetween",
    "GetDay",
    "GetHour",
    "GetMilliSecond",
    "GetMinute",
    "GetMonth",
    "GetSecond",
    "GetWeek",
    "GetWeekYear",
    "GetYear",
    "HoursBetween",
    "MilliSecondsBetween",
    "MinutesBetween",
    "MonthsBetween",
    "SecondsBetween",
    "SubtractDuration",
    "ToDate",
    "ToMilliSeconds",
    "ToString",
    "ToUnixTime",
    "WeeksBetween",
    "YearsBetween",
];

const COMPLEX: &[&str] = &["TOTUPLE", "TOBAG", "TOMAP", "TOP"];

// Load/store functions are grouped by family.
const STORAGE: &[&str] = &[
    "PigStorage TextLoader BinStorage PigDump",
    "JsonLoader JsonStorage",
    "AvroStorage TrevniStorage OrcStorage",
    "HBaseStorage AccumuloStorage",
];

// Category order is deterministic: eval, math, string, datetime, complex, storage.
pub(crate) fn builtin_entries() -> Vec<&'static str> {
    let mut out = Vec::new();
    out.extend_from_slice(EVAL);
    out.extend_from_slice(MATH);
    out.extend_from_slice(STRING);
    out.extend_from_slice(DATETIME);
    out.extend_from_slice(COMPLEX);
    out.extend_from_slice(STORAGE);
    out
}
