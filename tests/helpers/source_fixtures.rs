//! Common source code fixtures for tests.

pub const EMPTY: &str = "";

pub const SIMPLE_PROPERTY: &str = "product = 'jvm/app'";

/// A realistic module file
pub const MODULE_FILE: &str = r#"
// Module configuration
product {
    type = 'kmp/lib'
    platforms = { jvm, android }
}

val kotlinVersion = '2.0.0'

/* shared dependencies */
dependencies {
    'org.jetbrains.kotlinx:kotlinx-coroutines-core:1.8.0'
    $libs.ktor.client
    './shared' { exported = true }
}

@jvm dependencies {
    'io.ktor:ktor-client-cio:2.3.0'
}

!@android, @ios {
    settings.kotlin.languageVersion = .kotlinVersion
}

settings {
    kotlin {
        languageVersion = "2.0"
        optIns = { 'kotlin.RequiresOptIn' }
        freeCompilerArgs = listOf('-Xcontext-receivers', "-Xexpect-actual-classes",)
    }
    compose = ComposeSettings(true) {
        version = null
    }
    jvm { release = 17, mainClass = 'org.example.MainKt' }
}
"#;

/// A file without a single syntax error that uses every construct
pub const WELL_FORMED_FILE: &str = r#"
product { type = 'jvm/app' }

val version = "1.0"

dependencies {
    'org.example:lib:1.0',
    catalog.lib,
    @test 'org.junit:junit:4.13'
}

@jvm, !@android {
    settings.jvm.release = 17
    task('run', .settings.mainClass)
}

@test val debug = true

settings {
    kotlin = Kotlin(2) { allWarningsAsErrors = false }
    ratio = -1.5e3
    nothing = null
    list = { a, b, c }
}
"#;

pub const GARBAGE: &str = "}}} ))) ]]] @ !@ = , . : # val val = ( { %%% 'unterminated\n\"also /* never closed";

/// Realistic input with unsupported syntax mixed in
pub const MIXED_FILE: &str = r#"
product {
    platforms = [jvm, android]
}
dependencies {
    './shared': exported
    compose(enabled = true)
}
settings { kotlin { version = } }
"#;
