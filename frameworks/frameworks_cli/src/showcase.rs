//! Showcase Module
//!
//! The documented sample invocations, evaluated through the facades and
//! rendered as text.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 *
 * Creation productivity increased for code in this file by using AALang and GAB.
 * See https://github.com/yenrab/AALang-Gab
 */

use api_facades::*;
use infrastructure_external_format::encode_value;
use std::fmt;

/// One evaluated sample invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// The call as written
    pub call: &'static str,
    /// Rendered result
    pub result: String,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.call, self.result)
    }
}

/// Render a value in literal form
///
/// Unlike JSON this keeps `undefined` and `NaN` visible.
pub fn render(value: &Value) -> String {
    match value {
        Value::Undefined | Value::Number(_) | Value::Function(_) => value.to_string(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", inner.join(","))
        }
        Value::Object(object) => {
            let inner: Vec<String> = object
                .iter()
                .map(|(key, item)| format!("{}:{}", render(&Value::from(key)), render(item)))
                .collect();
            format!("{{{}}}", inner.join(","))
        }
        Value::Null | Value::Bool(_) | Value::String(_) => {
            encode_value(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

fn rows(rows: Vec<Vec<Value>>) -> String {
    render(&rows.into_iter().map(Value::from).collect())
}

fn seq(items: Vec<Value>) -> String {
    render(&Value::from(items))
}

fn opt(item: Option<Value>) -> String {
    render(&item.unwrap_or_default())
}

fn num(n: f64) -> String {
    render(&Value::from(n))
}

fn numbers(ns: Vec<f64>) -> String {
    seq(ns.into_iter().map(Value::from).collect())
}

fn failure<E: fmt::Display>(err: E) -> String {
    format!("error: {err}")
}

/// Evaluate every sample invocation
pub fn samples() -> Vec<Sample> {
    let mut out = Vec::new();
    let mut push = |call: &'static str, result: String| out.push(Sample { call, result });

    push(
        "chunk([1,2,3,4,5,6,7,8,9], 2)",
        chunk(&values![1, 2, 3, 4, 5, 6, 7, 8, 9], Some(2)).map_or_else(failure, rows),
    );
    push(
        "chunk([1,2], 0)",
        chunk(&values![1, 2], Some(0)).map_or_else(failure, rows),
    );
    push(
        "compact([false,null,0,\"\",undefined,NaN])",
        seq(compact(&values![false, Value::Null, 0, "", Value::Undefined, f64::NAN])),
    );
    push(
        "flatten([1,[2,[3,[4]],5]])",
        seq(flatten(&values![1, values![2, values![3, values![4]], 5]])),
    );
    push(
        "flattenDepth([1,[2,[3,[4]]]], 2)",
        seq(flatten_depth(&values![1, values![2, values![3, values![4]]]], 2)),
    );
    push(
        "fill([1,2,3,4,5], 5, 2, 3)",
        seq(fill(&values![1, 2, 3, 4, 5], &Value::from(5), Some(2), Some(3))),
    );
    push("head([])", opt(head(Some(&[] as &[Value]))));
    push("nth([1,2,3], -1)", opt(nth(&values![1, 2, 3], Some(-1))));
    push(
        "dropWhile([1,1,2,1], [1])",
        drop_while(&values![1, 1, 2, 1], &Value::from(values![1])).map_or_else(failure, seq),
    );
    push(
        "dropWhile([1,2], 7)",
        drop_while(&values![1, 2], &Value::from(7)).map_or_else(failure, seq),
    );
    push(
        "lastIndexOf([1,2,1], 1)",
        opt(last_index_of(&values![1, 2, 1], &Value::from(1), None).map(Value::from)),
    );
    push(
        "sortedIndex([1,3,5], 4)",
        num(sorted_index(&values![1, 3, 5], &Value::from(4)) as f64),
    );
    push(
        "sortedIndexLast([1,3,3,5], 3)",
        num(sorted_index_last(&values![1, 3, 3, 5], &Value::from(3)) as f64),
    );
    push("union([1,2],[2,3])", seq(union(&[values![1, 2], values![2, 3]])));
    push(
        "intersect([1,2,3],[2,3,4])",
        seq(intersect(&[values![1, 2, 3], values![2, 3, 4]])),
    );
    push(
        "difference([1,0,3],[1,2])",
        seq(difference(&values![1, 0, 3], &values![1, 2])),
    );
    push("xor([1,2],[2,3])", seq(xor(&[values![1, 2], values![2, 3]])));
    push(
        "xorOdd([1,2],[2,3],[3,4])",
        seq(xor_odd(&[values![1, 2], values![2, 3], values![3, 4]])),
    );
    push(
        "zip([1,2],[3,4],[5,6])",
        rows(zip(&[values![1, 2], values![3, 4], values![5, 6]])),
    );
    push(
        "zipObject([\"a\",\"b\"],[1])",
        render(&Value::from(zip_object(&values!["a", "b"], &values![1]))),
    );
    push(
        "pullAt([5,1,4], 0)",
        seq(pull_at(values![5, 1, 4], &values![0])),
    );
    push("sort([3,1,2])", seq(sort(&values![3, 1, 2])));
    push("stalin([1,2,5,3,4,6])", seq(stalin(&values![1, 2, 5, 3, 4, 6], None)));
    push("sumFlat([1,[2,[3,\"x\"]]])", num(sum_flat(&values![1, values![2, values![3, "x"]]])));
    push(
        "toNumber([1,2.5,3])",
        to_number(&values![1, 2.5, 3]).map_or_else(|| "undefined".to_string(), |n| n.to_string()),
    );
    push("mean([1,2,3,\"x\"])", num(mean(&values![1, 2, 3, "x"])));
    push("median([1,3,2])", num(median(&values![1, 3, 2])));
    push("median([1,2,3,4])", num(median(&values![1, 2, 3, 4])));
    push("mean([])", num(mean(&[])));
    push("range([5,1,9])", num(range(&values![5, 1, 9])));
    push(
        "subtractArrays([10,10,10],[1,2])",
        numbers(subtract_arrays(&[values![10, 10, 10], values![1, 2]])),
    );
    push(
        "divideArrays([8,8],[2,0])",
        numbers(divide_arrays(&[values![8, 8], values![2, 0]])),
    );
    push("pow([2,10])", num(pow(&values![2, 10])));
    push(
        "join([\"a\",\"b\"])",
        render(&Value::from(join(Some(values!["a", "b"].as_slice()), None))),
    );
    push("repeat(\"ab\", 2)", render(&Value::from(repeat(Some("ab"), 2))));
    push(
        "times(7)",
        times(&Value::from(7), None).map_or_else(|| "false".to_string(), seq),
    );

    out
}
