//! Built-in lookup tables
//!
//! The shipped defaults for the IMathLib reference site. All of this is
//! deployment data, not logic: entries are stored as the raw matchable text
//! and escaped at rule compilation, never here. Table order is significant
//! and is preserved from the site's curation.

/// Anchor directory that roots every generated link.
pub const ANCHOR_SEGMENT: &str = "contents";

/// Literal label rewritten into a home link inside navigation headers.
pub const HOME_LABEL: &str = "[ホーム]";

/// Home page, relative to the anchor directory.
pub const HOME_TARGET: &str = "top.html";

/// Preprocessor directives, matched whole-word in table order.
pub const DIRECTIVES: &[&str] = &[
    "#include",
    "#define",
    "#undef",
    "#if",
    "#else",
    "#endif",
    "#if defined",
    "#elif defined",
];

/// Built-in type names.
pub const BASIC_TYPES: &[&str] = &[
    "unsigned", "signed", "char", "wchar_t", "short", "int", "long", "__int8", "__int16",
    "__int32", "__int64", "char16_t", "char32_t", "float", "double", "void", "auto", "bool",
];

/// Remaining language keywords, rendered bold.
pub const KEYWORDS: &[&str] = &[
    "template",
    "class",
    "struct",
    "union",
    "inline",
    "using",
    "typename",
    "static",
    "const",
    "switch",
    "case",
    "default",
    "break",
    "for",
    "while",
    "do",
    "if",
    "else",
    "catch",
    "try",
    "throw",
    "explicit",
    "constexpr",
    "typeid",
    "static_cast",
    "const_cast",
    "dynamic_cast",
    "reinterpret_cast",
    "nullptr",
    "this",
    "return",
    "public",
    "protected",
    "private",
    "friend",
    "namespace",
    "sizeof",
    "true",
    "false",
    "static_assert",
    "noexcept",
    "typedef",
    "continue",
    "delete[]",
    "delete",
    "new",
    "virtual",
    "volatile",
    "__cdecl",
    "__clrcall",
    "__fastcall",
    "__stdcall",
    "__thiscall",
    "__vectorcall",
    "decltype",
    "goto",
];

/// Header include paths as they appear in escaped markup, with the page
/// each one links to. Word boundaries cannot delimit these, so they are
/// matched bare, before any symbol rule runs.
pub const HEADERS: &[(&str, &str)] = &[
    ("&lt;IMathLib/IMathLib_config.hpp&gt;", "IMathLib_config.html"),
    ("&lt;IMathLib/utility/utility.hpp&gt;", "utility/utility.html"),
    ("&lt;IMathLib/utility/type_traits.hpp&gt;", "utility/type_traits.html"),
    ("&lt;IMathLib/utility/algorithm.hpp&gt;", "utility/algorithm.html"),
    ("&lt;IMathLib/container/container.hpp&gt;", "container/container.html"),
    ("&lt;IMathLib/container/array.hpp&gt;", "container/array.html"),
    ("&lt;IMathLib/string/string.hpp&gt;", "string/string.html"),
    ("&lt;IMathLib/math/complex.hpp&gt;", "math/complex.html"),
    ("&lt;IMathLib/math/dual_numbers.hpp&gt;", "math/dual_numbers.html"),
    ("&lt;IMathLib/math/split_complex.hpp&gt;", "math/split_complex.html"),
    ("&lt;IMathLib/math/quaternion.hpp&gt;", "math/quaternion.html"),
    ("&lt;IMathLib/math/octonion.hpp&gt;", "math/octonion.html"),
    ("&lt;IMathLib/math/vector.hpp&gt;", "math/vector.html"),
    ("&lt;IMathLib/math/matrix.hpp&gt;", "math/matrix.html"),
    ("&lt;IMathLib/math/bitset.hpp&gt;", "math/bitset.html"),
    ("&lt;IMathLib/math/math.hpp&gt;", "math/math.html"),
    (
        "&lt;IMathLib/math/differential_equation.hpp&gt;",
        "math/differential_equation.html",
    ),
    ("&lt;IMathLib/interface/interface.hpp&gt;", "interface/interface.html"),
];

/// Fully-qualified symbol names, matched whole-word, grouped by the header
/// that declares them.
pub const SYMBOLS: &[(&str, &str)] = &[
    // <IMathLib/IMathLib_config.hpp>
    ("iml::imint", "IMathLib_config.html#integral"),
    ("iml::imsize_t", "IMathLib_config.html#integral"),
    ("iml::ptrdiff_t", "IMathLib_config.html#integral"),
    // <IMathLib/utility/utility.hpp>
    ("iml::object_type", "utility/utility/object_type.html"),
    ("iml::placeholder", "utility/utility/placeholder.html"),
    ("iml::hierarchy_type", "utility/utility/hierarchy_type.html"),
    ("iml::move", "utility/utility/move.html"),
    ("iml::forward", "utility/utility/forward.html"),
    ("iml::swap", "utility/utility/swap.html"),
    ("iml::this_return", "utility/utility/this_return.html"),
    // <IMathLib/utility/type_traits.hpp>
    ("iml::type_comparison", "utility/type_traits/type_comparison.html"),
    // <IMathLib/utility/algorithm.hpp>
    ("iml::copy_order", "utility/algorithm/copy_order.html"),
    ("iml::copy_reverse_order", "utility/algorithm/copy_reverse_order.html"),
    ("iml::copy_if", "utility/algorithm/copy_if.html"),
    ("iml::fill", "utility/algorithm/fill.html"),
    ("iml::sort", "utility/algorithm/sort.html"),
    ("iml::find", "utility/algorithm/find.html"),
    ("iml::rfind", "utility/algorithm/rfind.html"),
    ("iml::find_if", "utility/algorithm/find_if.html"),
    ("iml::rfind_if", "utility/algorithm/rfind_if.html"),
    ("iml::for_each", "utility/algorithm/for_each.html"),
    // <IMathLib/string/string.hpp>
    ("iml::string", "string/string/string.html"),
    ("iml::cstring", "string/string/string.html"),
    ("iml::wstring", "string/string/string.html"),
    // <IMathLib/math/math.hpp>
    ("iml::mod", "math/math/mod.html"),
    ("iml::abs", "math/math/abs.html"),
    ("iml::conj", "math/math/conj.html"),
    ("iml::isqrt", "math/math/isqrt.html"),
    ("iml::sqrt", "math/math/sqrt.html"),
    ("iml::pi", "math/math/pi.html"),
    ("iml::lgamma", "math/math/lgamma.html"),
    ("iml::gamma", "math/math/gamma.html"),
    ("iml::gamma1", "math/math/gamma1.html"),
    ("iml::gamma2", "math/math/gamma2.html"),
    ("iml::digamma", "math/math/digamma.html"),
    ("iml::euler_constant", "math/math/euler_constant.html"),
    ("iml::beta", "math/math/beta.html"),
    ("iml::beta_i", "math/math/beta_i.html"),
    ("iml::dirichlet_eta", "math/math/dirichlet_eta.html"),
    ("iml::riemann_zeta", "math/math/riemann_zeta.html"),
    ("iml::laguerre_polynomials", "math/math/laguerre_polynomials.html"),
    (
        "iml::associated_laguerre_polynomials",
        "math/math/associated_laguerre_polynomials.html",
    ),
    // <IMathLib/math/differential_equation.hpp>
    ("iml::ode::euler_method", "math/differential_equation/euler_method.html"),
    (
        "iml::ode::runge_kutta_method",
        "math/differential_equation/runge_kutta_method.html",
    ),
    ("iml::ode::taylor_method", "math/differential_equation/taylor_method.html"),
    // <IMathLib/interface/interface.hpp>
    ("iml::i_f::rect", "interface/interface/rect.html"),
];
