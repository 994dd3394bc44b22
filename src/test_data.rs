#[cfg(test)]
pub const WXR_EXPORT: &str = r##"<?xml version="1.0" encoding="UTF-8" ?>
<!-- This is a WordPress eXtended RSS file generated by WordPress as an export of your site. -->
<rss version="2.0"
    xmlns:excerpt="http://wordpress.org/export/1.2/excerpt/"
    xmlns:content="http://purl.org/rss/1.0/modules/content/"
    xmlns:wfw="http://wellformedweb.org/CommentAPI/"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:wp="http://wordpress.org/export/1.2/"
>
<channel>
    <title>Field Notes</title>
    <link>https://notes.example.com</link>
    <description>Just another WordPress site</description>
    <language>en-US</language>
    <wp:wxr_version>1.2</wp:wxr_version>
    <wp:author><wp:author_id>1</wp:author_id><wp:author_login><![CDATA[admin]]></wp:author_login></wp:author>
    <wp:category><wp:term_id>2</wp:term_id><wp:category_nicename><![CDATA[news]]></wp:category_nicename></wp:category>

    <item>
        <title><![CDATA[Hello World]]></title>
        <link>https://notes.example.com/2023/01/04/hello-world/</link>
        <dc:creator><![CDATA[admin]]></dc:creator>
        <content:encoded><![CDATA[]]></content:encoded>
        <excerpt:encoded><![CDATA[]]></excerpt:encoded>
        <wp:post_id>42</wp:post_id>
        <wp:post_date><![CDATA[2023-01-04T09:15:00]]></wp:post_date>
        <wp:post_modified><![CDATA[2023-01-04 09:15:00]]></wp:post_modified>
        <wp:post_name><![CDATA[hello-world]]></wp:post_name>
        <wp:status><![CDATA[publish]]></wp:status>
        <wp:post_type><![CDATA[post]]></wp:post_type>
        <category domain="category" nicename="news"><![CDATA[News]]></category>
    </item>

    <item>
        <title><![CDATA[Rust & WordPress]]></title>
        <dc:creator><![CDATA[admin]]></dc:creator>
        <content:encoded><![CDATA[<p>Converting <em>old</em> posts.</p>]]></content:encoded>
        <excerpt:encoded><![CDATA[<p>Short version</p>]]></excerpt:encoded>
        <wp:post_id>43</wp:post_id>
        <wp:post_date><![CDATA[2023-02-10 18:30:00]]></wp:post_date>
        <wp:post_modified><![CDATA[2023-02-11 08:00:00]]></wp:post_modified>
        <wp:post_name><![CDATA[rust-and-wordpress]]></wp:post_name>
        <wp:status><![CDATA[publish]]></wp:status>
        <wp:post_type><![CDATA[post]]></wp:post_type>
        <category domain="post_tag" nicename="rust"><![CDATA[rust]]></category>
        <category domain="category" nicename="code"><![CDATA[Code]]></category>
        <category domain="post_tag" nicename="xml"><![CDATA[xml]]></category>
        <category domain="category" nicename="news"><![CDATA[News]]></category>
        <wp:comment>
            <wp:comment_id>3</wp:comment_id>
            <wp:comment_content><![CDATA[Nice post]]></wp:comment_content>
        </wp:comment>
    </item>

    <item>
        <title><![CDATA[header.png]]></title>
        <wp:post_id>50</wp:post_id>
        <wp:post_name><![CDATA[header-png]]></wp:post_name>
        <wp:status><![CDATA[inherit]]></wp:status>
        <wp:post_type><![CDATA[attachment]]></wp:post_type>
        <wp:attachment_url><![CDATA[https://notes.example.com/wp-content/uploads/header.png]]></wp:attachment_url>
    </item>

    <item>
        <title><![CDATA[About]]></title>
        <content:encoded><![CDATA[<p>This is <strong>me</strong>.</p>
<ul>
<li>Rust</li>
<li>Coffee</li>
</ul>]]></content:encoded>
        <wp:post_id>44</wp:post_id>
        <wp:post_date><![CDATA[2022-12-01 12:00:00]]></wp:post_date>
        <wp:post_modified><![CDATA[2022-12-01 12:00:00]]></wp:post_modified>
        <wp:post_name><![CDATA[about]]></wp:post_name>
        <wp:status><![CDATA[publish]]></wp:status>
        <wp:post_type><![CDATA[page]]></wp:post_type>
    </item>

    <item>
        <title><![CDATA[Home]]></title>
        <wp:post_id>51</wp:post_id>
        <wp:status><![CDATA[publish]]></wp:status>
        <wp:post_type><![CDATA[nav_menu_item]]></wp:post_type>
    </item>

    <item>
        <title><![CDATA[Unfinished thoughts]]></title>
        <content:encoded><![CDATA[<p>Some day.</p>]]></content:encoded>
        <wp:post_id>45</wp:post_id>
        <wp:post_date><![CDATA[0000-00-00 00:00:00]]></wp:post_date>
        <wp:post_modified><![CDATA[2023-03-01 07:45:00]]></wp:post_modified>
        <wp:post_name><![CDATA[]]></wp:post_name>
        <wp:status><![CDATA[draft]]></wp:status>
        <wp:post_type><![CDATA[post]]></wp:post_type>
        <category domain="category" nicename="uncategorized"><![CDATA[Uncategorized]]></category>
    </item>

    <item>
        <title><![CDATA[Typeless]]></title>
        <wp:post_id>52</wp:post_id>
    </item>
</channel>
</rss>
"##;

#[cfg(test)]
pub const WXR_WITHOUT_CHANNEL: &str = r##"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0" xmlns:wp="http://wordpress.org/export/1.2/">
    <item>
        <wp:post_id>1</wp:post_id>
        <wp:post_type>post</wp:post_type>
    </item>
</rss>
"##;
