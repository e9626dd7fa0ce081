//! render::html
//!
//! The static viewer page: a fixed HTML shell that loads d3 v7 from the
//! CDN plus a local `graph.js`, with the tree embedded inline as a
//! `const data` literal.
//!
//! # Design
//!
//! The page is two fixed template halves around the serialized root node.
//! Everything interactive lives in `graph.js`, which is shipped alongside
//! the page and reads `data`; the styling carries the `married` / `single`
//! circle classes that script toggles per node.

use crate::core::tree::TreeNode;

/// Template up to and including the `const data = ` assignment.
const PAGE_PREFIX: &str = r##"<!DOCTYPE html>
<html>
<head>
    <title>Family Tree</title>
    <script src="https://d3js.org/d3.v7.min.js"></script>
    <style>
        body {
            margin: 0;
            padding: 0;
            overflow: hidden;
        }
        #tree {
            width: 100vw;
            height: 100vh;
        }
        .link {
            fill: none;
            stroke: #ccc;
            stroke-width: 2px;
        }
        .node circle {
            fill: white;
            stroke: steelblue;
            stroke-width: 2px;
        }
        .node circle.married {
            fill: #ff9999;
        }
        .node circle.single {
            fill: #99ff99;
        }
        .node {
            cursor: pointer;
        }
        .node text {
            font: 14px sans-serif;
            pointer-events: none;
        }
        .name-label {
            fill: black;
        }
        .expand-symbol {
            font-weight: bold;
            fill: #666;
            user-select: none;
        }
    </style>
</head>
<body>
    <div id="tree"></div>
    <script src="graph.js"></script>
    <script>
        const data = "##;

/// Template from the end of the data literal to the end of the page.
const PAGE_SUFFIX: &str = r##";
        // Data will be loaded by graph.js
    </script>
</body>
</html>
"##;

/// Render the full page text, trailing newline included.
///
/// The inline literal is compact JSON; the pretty form lives in the JSON
/// artifact, not here.
pub fn render(root: &TreeNode) -> serde_json::Result<String> {
    let data = serde_json::to_string(root)?;
    Ok([PAGE_PREFIX, &data, PAGE_SUFFIX].concat())
}
